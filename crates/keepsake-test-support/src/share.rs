//! Test share platform — configurable `SharePlatform` implementation.

use std::sync::Mutex;

use async_trait::async_trait;
use keepsake_core::share::{ShareError, SharePlatform};

/// A share platform with scripted outcomes that records every call.
#[derive(Debug)]
pub struct StubSharePlatform {
    share_ok: bool,
    copy_ok: bool,
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl StubSharePlatform {
    /// A platform where native share succeeds.
    #[must_use]
    pub fn sharing() -> Self {
        Self::with_outcomes(true, true)
    }

    /// A platform with no native share but a working clipboard.
    #[must_use]
    pub fn copy_only() -> Self {
        Self::with_outcomes(false, true)
    }

    /// A platform where both actions fail.
    #[must_use]
    pub fn broken() -> Self {
        Self::with_outcomes(false, false)
    }

    fn with_outcomes(share_ok: bool, copy_ok: bool) -> Self {
        Self {
            share_ok,
            copy_ok,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the recorded `(action, url)` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, action: &'static str, url: &str) {
        self.calls.lock().unwrap().push((action, url.to_owned()));
    }
}

#[async_trait]
impl SharePlatform for StubSharePlatform {
    async fn share(&self, url: &str) -> Result<(), ShareError> {
        self.record("share", url);
        if self.share_ok {
            Ok(())
        } else {
            Err(ShareError::Unavailable)
        }
    }

    async fn copy(&self, url: &str) -> Result<(), ShareError> {
        self.record("copy", url);
        if self.copy_ok {
            Ok(())
        } else {
            Err(ShareError::Failed("clipboard rejected the write".to_owned()))
        }
    }
}
