//! Best-effort share with clipboard fallback.
//!
//! The platform integration is external; this module only orders the
//! attempts and absorbs failures. A total failure surfaces nothing.

use std::time::Duration;

use serde::Serialize;

use keepsake_core::share::SharePlatform;

/// How long the "link copied" indicator stays visible.
pub const COPY_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// What the share attempt amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShareOutcome {
    /// The platform's native share action completed.
    Shared,
    /// Native share was unavailable; the link went to the clipboard.
    Copied,
    /// Neither action worked. Degrades silently.
    Unavailable,
}

/// Tries the native share action, falling back to a clipboard copy.
pub async fn share_with_fallback(platform: &dyn SharePlatform, url: &str) -> ShareOutcome {
    match platform.share(url).await {
        Ok(()) => ShareOutcome::Shared,
        Err(share_error) => match platform.copy(url).await {
            Ok(()) => {
                tracing::debug!(%share_error, "native share failed; link copied instead");
                ShareOutcome::Copied
            }
            Err(copy_error) => {
                tracing::debug!(%share_error, %copy_error, "share and copy both failed");
                ShareOutcome::Unavailable
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_test_support::StubSharePlatform;

    const URL: &str = "https://keepsake.example/our-story";

    #[tokio::test]
    async fn test_native_share_wins_when_available() {
        let platform = StubSharePlatform::sharing();

        let outcome = share_with_fallback(&platform, URL).await;

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(platform.calls(), vec![("share", URL.to_owned())]);
    }

    #[tokio::test]
    async fn test_copy_fallback_when_share_unavailable() {
        let platform = StubSharePlatform::copy_only();

        let outcome = share_with_fallback(&platform, URL).await;

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(
            platform.calls(),
            vec![("share", URL.to_owned()), ("copy", URL.to_owned())]
        );
    }

    #[tokio::test]
    async fn test_total_failure_degrades_silently() {
        let platform = StubSharePlatform::broken();

        let outcome = share_with_fallback(&platform, URL).await;

        assert_eq!(outcome, ShareOutcome::Unavailable);
    }
}
