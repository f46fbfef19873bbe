//! Integration tests for the ambient effects as wired by the session:
//! the always-on particle field and the choice-triggered bursts.

mod common;

use std::time::Duration;

use keepsake_effects::field::{FIELD_CAP, SPAWN_PERIOD};
use keepsake_narrative::domain::events::ProposalChoice;
use keepsake_narrative::domain::screen::Screen;

#[tokio::test(start_paused = true)]
async fn test_particle_field_runs_from_session_start() {
    let session = common::start_session(10);
    let particles = session.particles();

    assert!(particles.borrow().is_empty());

    tokio::time::sleep(SPAWN_PERIOD + Duration::from_millis(10)).await;
    assert_eq!(particles.borrow().len(), 1);

    tokio::time::sleep(SPAWN_PERIOD * 2).await;
    assert_eq!(particles.borrow().len(), 3);

    session.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_particle_field_caps_and_evicts_oldest() {
    let session = common::start_session(11);
    let particles = session.particles();

    tokio::time::sleep(SPAWN_PERIOD + Duration::from_millis(10)).await;
    let first_id = particles.borrow()[0].id;

    // Sixteen more spawns push the first particle out.
    tokio::time::sleep(SPAWN_PERIOD * 16).await;

    let live = particles.borrow().clone();
    assert_eq!(live.len(), FIELD_CAP);
    assert!(live.iter().all(|p| p.id != first_id));

    session.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_the_field() {
    let session = common::start_session(12);
    let particles = session.particles();

    tokio::time::sleep(SPAWN_PERIOD * 2 + Duration::from_millis(10)).await;
    let before = particles.borrow().len();

    session.shutdown();
    tokio::time::sleep(SPAWN_PERIOD * 10).await;

    assert_eq!(particles.borrow().len(), before);
}

#[tokio::test(start_paused = true)]
async fn test_choice_triggers_a_self_terminating_burst() {
    let session = common::start_session(13);
    let mut frames = session.take_burst_frames().unwrap();
    common::walk_to(&session, Screen::Proposal).await;

    session.choose(ProposalChoice::Yes).unwrap();
    tokio::time::sleep(Duration::from_secs(3)).await;

    let mut yes_frames = 0_u32;
    while frames.try_recv().is_ok() {
        yes_frames += 1;
    }
    assert!(yes_frames > 0);

    // The burst expired on its own: no more frames arrive.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(frames.try_recv().is_err());

    session.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_always_bursts_longer_than_yes() {
    let frames_for = |seed: u64, choice: ProposalChoice| async move {
        let session = common::start_session(seed);
        let mut frames = session.take_burst_frames().unwrap();
        common::walk_to(&session, Screen::Proposal).await;

        session.choose(choice).unwrap();
        tokio::time::sleep(Duration::from_secs(6)).await;
        session.shutdown();

        let mut count = 0_u32;
        while frames.try_recv().is_ok() {
            count += 1;
        }
        count
    };

    let yes = frames_for(14, ProposalChoice::Yes).await;
    let always = frames_for(15, ProposalChoice::Always).await;

    assert!(always > yes, "always {always} <= yes {yes}");
}

#[tokio::test(start_paused = true)]
async fn test_burst_frames_receiver_is_taken_once() {
    let session = common::start_session(16);

    assert!(session.take_burst_frames().is_some());
    assert!(session.take_burst_frames().is_none());

    session.shutdown();
}
