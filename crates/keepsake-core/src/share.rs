//! Outbound port for the platform share service.
//!
//! The hosting platform supplies the implementation; the engine only ever
//! calls it best-effort and absorbs failures.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a share platform.
///
/// These never escape the session: a failed share degrades to a clipboard
/// copy, and a failed copy degrades to nothing.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The platform offers no native share action.
    #[error("native share is unavailable")]
    Unavailable,

    /// The share or copy action started but did not complete.
    #[error("share action failed: {0}")]
    Failed(String),
}

/// Platform share and clipboard services.
#[async_trait]
pub trait SharePlatform: Send + Sync {
    /// Attempts the platform's native share action for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] if native sharing is unavailable or aborted.
    async fn share(&self, url: &str) -> Result<(), ShareError>;

    /// Copies `url` to the platform clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] if the clipboard is unavailable.
    async fn copy(&self, url: &str) -> Result<(), ShareError>;
}
