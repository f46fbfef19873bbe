//! Continuous floating-particle field.
//!
//! One particle spawns every two seconds with randomized placement, size,
//! opacity, and drift duration. The live set is a bounded FIFO: beyond the
//! cap the oldest particle is evicted regardless of its remaining drift
//! time. Eviction ignores visual expiry.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use keepsake_core::clock::Clock;
use keepsake_core::rng::{RandomSource, SharedRandom};

/// Maximum number of live floating particles.
pub const FIELD_CAP: usize = 16;

/// Interval between particle spawns.
pub const SPAWN_PERIOD: Duration = Duration::from_secs(2);

/// One decorative floating particle.
#[derive(Debug, Clone, Serialize)]
pub struct FloatingParticle {
    /// Time-derived identifier (milliseconds since the Unix epoch).
    pub id: i64,
    /// Horizontal position as a percentage of the viewport, in `[0, 100)`.
    pub horizontal: f64,
    /// Drift duration in seconds, in `[5, 15)`.
    pub duration_secs: f64,
    /// Glyph size, in `[10, 30)`.
    pub size: f64,
    /// Opacity, in `[0.2, 0.6)`.
    pub opacity: f64,
}

/// The bounded live set of floating particles.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: VecDeque<FloatingParticle>,
}

impl ParticleField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns one randomized particle, evicting the oldest beyond the cap.
    pub fn emit(&mut self, clock: &dyn Clock, rng: &mut dyn RandomSource) {
        let particle = FloatingParticle {
            id: clock.now_millis(),
            horizontal: rng.span(0.0, 100.0),
            duration_secs: rng.span(5.0, 15.0),
            size: rng.span(10.0, 30.0),
            opacity: rng.span(0.2, 0.6),
        };

        if self.particles.len() == FIELD_CAP {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }

    /// Returns the number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns whether the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Returns the live set, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FloatingParticle> {
        self.particles.iter().cloned().collect()
    }
}

/// Handle to the running field task.
///
/// The task spawns a particle every [`SPAWN_PERIOD`] and publishes the live
/// set over a watch channel. Dropping the handle aborts the task.
#[derive(Debug)]
pub struct FieldRunner {
    task: JoinHandle<()>,
    rx: watch::Receiver<Vec<FloatingParticle>>,
}

impl FieldRunner {
    /// Starts the field task.
    #[must_use]
    pub fn start(clock: Arc<dyn Clock>, rng: SharedRandom) -> Self {
        let (tx, rx) = watch::channel(Vec::new());

        let task = tokio::spawn(async move {
            let mut field = ParticleField::new();
            let start = tokio::time::Instant::now() + SPAWN_PERIOD;
            let mut ticker = tokio::time::interval_at(start, SPAWN_PERIOD);
            loop {
                ticker.tick().await;
                {
                    let mut rng = rng.lock().expect("random source lock poisoned");
                    field.emit(clock.as_ref(), &mut *rng);
                }
                tx.send_replace(field.snapshot());
            }
        });

        tracing::debug!("particle field started");
        Self { task, rx }
    }

    /// Returns a subscription to the live particle set.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<FloatingParticle>> {
        self.rx.clone()
    }

    /// Stops the field task. Idempotent.
    pub fn stop(&self) {
        self.task.abort();
        tracing::debug!("particle field stopped");
    }
}

impl Drop for FieldRunner {
    fn drop(&mut self) {
        self.task.abort();
    }
}
