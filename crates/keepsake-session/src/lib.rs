//! Keepsake — session runtime.
//!
//! Owns the gate and story aggregates for one viewing session, wires the
//! ambient particle systems and the one-shot unlock transition, and
//! publishes observable views for the rendering layer. Everything here is
//! transient: a session lives exactly as long as its hosting process.

pub mod runtime;
pub mod share;
pub mod telemetry;
pub mod view;

pub use runtime::{StorySession, UNLOCK_DELAY};
pub use share::{COPY_INDICATOR_DURATION, ShareOutcome};
pub use view::{RevealView, StoryView};
