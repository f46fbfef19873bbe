//! Shared test helpers for session integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Duration as TimeDelta, TimeZone, Utc};
use keepsake_content::ContentPack;
use keepsake_core::clock::Clock;
use keepsake_core::rng::{EntropySource, SharedRandom};
use keepsake_narrative::domain::screen::Screen;
use keepsake_session::{StorySession, UNLOCK_DELAY};
use keepsake_test_support::SteppingClock;

/// Builds a session on a stepping clock (so time-derived ids differ) and a
/// seeded entropy source.
pub fn start_session(seed: u64) -> StorySession {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::new(
        Utc.with_ymd_and_hms(2026, 2, 14, 18, 0, 0).unwrap(),
        TimeDelta::seconds(1),
    ));
    let rng: SharedRandom = Arc::new(Mutex::new(EntropySource::seeded(seed)));
    StorySession::start(ContentPack::bundled(), clock, rng)
}

/// Clears both gate steps.
pub fn unlock_gate(session: &StorySession) {
    session.submit_gate("2022");
    let gate = session.submit_gate("grenoble");
    assert!(gate.unlocked);
}

/// Clears the gate, waits out the unlock celebration, and advances to
/// `target`. Requires a paused-time tokio runtime.
pub async fn walk_to(session: &StorySession, target: Screen) {
    unlock_gate(session);
    tokio::time::sleep(UNLOCK_DELAY + Duration::from_millis(50)).await;
    assert_eq!(session.views().borrow().screen, Screen::Welcome);

    let mut screen = Screen::Welcome;
    while screen < target {
        screen = session.advance(screen.next().unwrap()).unwrap();
    }
    assert_eq!(session.views().borrow().screen, target);
}
