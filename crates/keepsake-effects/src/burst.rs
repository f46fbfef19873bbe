//! Two-origin celebration burst.
//!
//! Triggered from the proposal screen's terminal choice. Frames are emitted
//! on an animation-frame cadence from both viewport edges until a fixed
//! deadline, then the task ends on its own. Overlapping triggers are
//! additive: each runs as an independent task to its own deadline.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use keepsake_core::rng::{RandomSource, SharedRandom};

/// Animation-frame cadence for burst emission.
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Burst duration for the plain affirmative.
pub const PLAIN_DURATION: Duration = Duration::from_secs(2);

/// Burst duration for the amplified affirmative.
pub const AMPLIFIED_DURATION: Duration = Duration::from_secs(5);

/// Particles emitted from each origin per frame.
pub const PARTICLES_PER_ORIGIN: usize = 3;

/// Angular spread around each origin's divergent angle, in degrees.
pub const SPREAD_DEGREES: f64 = 55.0;

/// The fixed burst palette.
pub const PALETTE: [&str; 3] = ["#f472b6", "#fbcfe8", "#ffffff"];

/// The two symmetric burst origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BurstOrigin {
    /// The left viewport edge, firing at 60°.
    Left,
    /// The right viewport edge, firing at 120°.
    Right,
}

impl BurstOrigin {
    /// Returns this origin's divergent launch angle, in degrees.
    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        match self {
            Self::Left => 60.0,
            Self::Right => 120.0,
        }
    }
}

/// One ephemeral burst particle. Never retained — rendered and discarded
/// within its frame.
#[derive(Debug, Clone, Serialize)]
pub struct BurstParticle {
    /// The edge this particle launches from.
    pub origin: BurstOrigin,
    /// Launch angle in degrees.
    pub angle_degrees: f64,
    /// Angular spread in degrees.
    pub spread_degrees: f64,
    /// Palette color.
    pub color: &'static str,
}

/// All particles emitted in one animation frame.
pub type BurstFrame = Vec<BurstParticle>;

/// A burst's fixed emission schedule.
#[derive(Debug, Clone, Copy)]
pub struct BurstPlan {
    duration: Duration,
}

impl BurstPlan {
    /// Returns the plan for a terminal choice: amplified choices celebrate
    /// longer.
    #[must_use]
    pub fn for_choice(amplified: bool) -> Self {
        Self {
            duration: if amplified {
                AMPLIFIED_DURATION
            } else {
                PLAIN_DURATION
            },
        }
    }

    /// Returns the total emission duration.
    #[must_use]
    pub fn duration(self) -> Duration {
        self.duration
    }

    /// Produces one frame: [`PARTICLES_PER_ORIGIN`] particles from each
    /// edge, colors drawn independently from the palette.
    pub fn frame(self, rng: &mut dyn RandomSource) -> BurstFrame {
        let mut particles = Vec::with_capacity(PARTICLES_PER_ORIGIN * 2);
        for origin in [BurstOrigin::Left, BurstOrigin::Right] {
            for _ in 0..PARTICLES_PER_ORIGIN {
                particles.push(BurstParticle {
                    origin,
                    angle_degrees: origin.angle_degrees(),
                    spread_degrees: SPREAD_DEGREES,
                    color: PALETTE[rng.pick_index(PALETTE.len())],
                });
            }
        }
        particles
    }
}

/// Spawns an independent burst task emitting frames until the deadline.
///
/// The task holds no state after completion and there is no external
/// cancellation — expiry is the only way it stops. It also ends early if
/// the frame receiver is gone.
pub fn spawn_burst(
    plan: BurstPlan,
    rng: SharedRandom,
    frames: mpsc::UnboundedSender<BurstFrame>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let deadline = tokio::time::Instant::now() + plan.duration();
        let mut ticker = tokio::time::interval(FRAME_PERIOD);
        loop {
            ticker.tick().await;
            if tokio::time::Instant::now() >= deadline {
                break;
            }
            let frame = {
                let mut rng = rng.lock().expect("random source lock poisoned");
                plan.frame(&mut *rng)
            };
            if frames.send(frame).is_err() {
                break;
            }
        }
        tracing::debug!(duration_ms = plan.duration().as_millis(), "burst completed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use keepsake_core::rng::EntropySource;
    use keepsake_test_support::{ConstantRandom, ScriptedRandom};

    #[test]
    fn test_amplified_burst_outlasts_plain_burst() {
        let plain = BurstPlan::for_choice(false);
        let amplified = BurstPlan::for_choice(true);

        assert_eq!(plain.duration(), PLAIN_DURATION);
        assert_eq!(amplified.duration(), AMPLIFIED_DURATION);
        assert!(amplified.duration() > plain.duration());
    }

    #[test]
    fn test_frame_emits_three_particles_per_edge() {
        let mut rng = ConstantRandom::default();

        let frame = BurstPlan::for_choice(false).frame(&mut rng);

        assert_eq!(frame.len(), PARTICLES_PER_ORIGIN * 2);
        let left = frame.iter().filter(|p| p.origin == BurstOrigin::Left);
        let right = frame.iter().filter(|p| p.origin == BurstOrigin::Right);
        assert_eq!(left.count(), PARTICLES_PER_ORIGIN);
        assert_eq!(right.count(), PARTICLES_PER_ORIGIN);
    }

    #[test]
    fn test_frame_angles_diverge_symmetrically() {
        let mut rng = ConstantRandom::default();

        let frame = BurstPlan::for_choice(true).frame(&mut rng);

        for particle in &frame {
            let expected = match particle.origin {
                BurstOrigin::Left => 60.0,
                BurstOrigin::Right => 120.0,
            };
            assert!((particle.angle_degrees - expected).abs() < f64::EPSILON);
            assert!((particle.spread_degrees - SPREAD_DEGREES).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_frame_colors_come_from_the_palette() {
        let mut rng = EntropySource::seeded(21);

        for _ in 0..100 {
            for particle in BurstPlan::for_choice(false).frame(&mut rng) {
                assert!(PALETTE.contains(&particle.color));
            }
        }
    }

    #[test]
    fn test_frame_color_draws_follow_the_random_source() {
        let mut rng = ScriptedRandom::with_indexes(vec![0, 1, 2, 2, 1, 0]);

        let frame = BurstPlan::for_choice(false).frame(&mut rng);

        let colors: Vec<&str> = frame.iter().map(|p| p.color).collect();
        assert_eq!(
            colors,
            vec![PALETTE[0], PALETTE[1], PALETTE[2], PALETTE[2], PALETTE[1], PALETTE[0]]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_self_terminates_at_deadline() {
        let rng: SharedRandom = Arc::new(Mutex::new(ConstantRandom::default()));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let task = spawn_burst(BurstPlan::for_choice(false), rng, tx);
        tokio::time::sleep(PLAIN_DURATION + Duration::from_millis(100)).await;

        assert!(task.is_finished());
        let mut frames = 0;
        while rx.try_recv().is_ok() {
            frames += 1;
        }
        assert!(frames > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_amplified_burst_emits_more_frames() {
        let count_frames = |amplified: bool| async move {
            let rng: SharedRandom = Arc::new(Mutex::new(ConstantRandom::default()));
            let (tx, mut rx) = mpsc::unbounded_channel();
            let task = spawn_burst(BurstPlan::for_choice(amplified), rng, tx);
            tokio::time::sleep(AMPLIFIED_DURATION + Duration::from_millis(100)).await;
            assert!(task.is_finished());
            let mut frames = 0;
            while rx.try_recv().is_ok() {
                frames += 1;
            }
            frames
        };

        let plain = count_frames(false).await;
        let amplified = count_frames(true).await;

        assert!(amplified > plain, "amplified {amplified} <= plain {plain}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_bursts_are_additive() {
        let rng: SharedRandom = Arc::new(Mutex::new(ConstantRandom::default()));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let first = spawn_burst(BurstPlan::for_choice(false), Arc::clone(&rng), tx.clone());
        let second = spawn_burst(BurstPlan::for_choice(true), rng, tx);
        tokio::time::sleep(AMPLIFIED_DURATION + Duration::from_millis(100)).await;

        assert!(first.is_finished());
        assert!(second.is_finished());

        let mut frames: u128 = 0;
        while rx.try_recv().is_ok() {
            frames += 1;
        }
        // Both bursts ran to completion concurrently: strictly more frames
        // than the amplified burst alone could produce.
        let amplified_alone = AMPLIFIED_DURATION.as_millis() / FRAME_PERIOD.as_millis();
        assert!(frames > amplified_alone, "{frames} <= {amplified_alone}");
    }
}
