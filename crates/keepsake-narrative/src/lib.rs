//! Keepsake — Narrative Progression bounded context.
//!
//! Owns the screen pointer and its strictly forward order, the randomized
//! reveal selection, and the terminal proposal outcome.

pub mod application;
pub mod domain;
pub mod timeline;
