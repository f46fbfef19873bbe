//! Keepsake — Gate Access bounded context.
//!
//! The two-step secret-knowledge check that guards entry to the story:
//! first the year it began, then the city. Unlimited attempts, no lockout,
//! and once unlocked the gate never closes again.

pub mod application;
pub mod domain;
