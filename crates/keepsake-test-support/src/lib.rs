//! Shared test doubles for the Keepsake story engine.

mod clock;
mod rng;
mod share;

pub use clock::{FixedClock, SteppingClock};
pub use rng::{ConstantRandom, ScriptedRandom};
pub use share::StubSharePlatform;
