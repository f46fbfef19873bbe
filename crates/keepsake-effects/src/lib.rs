//! Keepsake — Ambient Particle Systems.
//!
//! Two independent decorative generators: a continuously running floating
//! particle field capped by FIFO eviction, and a self-terminating two-origin
//! celebration burst. Both draw randomness through the core `RandomSource`
//! and run as cooperative tokio tasks owned by the session runtime.

pub mod burst;
pub mod field;
