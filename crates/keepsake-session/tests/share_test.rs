//! Integration tests for the best-effort share flow and its transient
//! copied indicator.

mod common;

use std::time::Duration;

use keepsake_session::{COPY_INDICATOR_DURATION, ShareOutcome};
use keepsake_test_support::StubSharePlatform;

const URL: &str = "https://keepsake.example/our-story";

#[tokio::test(start_paused = true)]
async fn test_native_share_shows_no_indicator() {
    let session = common::start_session(20);
    let platform = StubSharePlatform::sharing();

    let outcome = session.share(&platform, URL).await;

    assert_eq!(outcome, ShareOutcome::Shared);
    assert!(!session.views().borrow().link_copied);
    session.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_copy_fallback_shows_indicator_for_two_seconds() {
    let session = common::start_session(21);
    let platform = StubSharePlatform::copy_only();

    let outcome = session.share(&platform, URL).await;
    assert_eq!(outcome, ShareOutcome::Copied);
    assert!(session.views().borrow().link_copied);

    // Still showing just before the deadline...
    tokio::time::sleep(COPY_INDICATOR_DURATION - Duration::from_millis(100)).await;
    assert!(session.views().borrow().link_copied);

    // ...and gone just after.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!session.views().borrow().link_copied);

    session.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_total_failure_surfaces_nothing() {
    let session = common::start_session(22);
    let platform = StubSharePlatform::broken();
    let views = session.views();
    let screen_before = views.borrow().screen;

    let outcome = session.share(&platform, URL).await;

    assert_eq!(outcome, ShareOutcome::Unavailable);
    assert!(!views.borrow().link_copied);
    assert_eq!(views.borrow().screen, screen_before);
    session.shutdown();
}
