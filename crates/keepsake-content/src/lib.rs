//! Keepsake — static story content.
//!
//! The timeline entries and the reveal message pool, supplied once at
//! startup and never mutated. The pack ships embedded in the binary and is
//! validated and fingerprinted at load.

pub mod pack;

pub use pack::{ContentError, ContentPack, TimelineEntry, fingerprint};
