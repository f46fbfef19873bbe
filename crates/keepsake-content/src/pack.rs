//! The content pack: ordered timeline entries and the reveal pool.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// The YAML source embedded at compile time.
const BUNDLED_SOURCE: &str = include_str!("../content/story.yaml");

/// Errors raised while loading a content pack.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The YAML source did not parse.
    #[error("content pack parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The pack parsed but is unusable.
    #[error("content pack invalid: {0}")]
    Invalid(String),
}

/// One entry of the fixed journey timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub text: String,
}

/// The full static content pack.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentPack {
    /// Ordered journey timeline.
    pub timeline: Vec<TimelineEntry>,
    /// Candidate affirmation messages for the reveal screen.
    pub reveal_pool: Vec<String>,
}

impl ContentPack {
    /// Parses and validates a pack from YAML source.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed YAML and
    /// `ContentError::Invalid` for an empty timeline or reveal pool.
    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        let pack: Self = serde_yaml::from_str(source)?;

        if pack.timeline.is_empty() {
            return Err(ContentError::Invalid("the timeline has no entries".to_owned()));
        }
        if pack.reveal_pool.is_empty() {
            return Err(ContentError::Invalid("the reveal pool is empty".to_owned()));
        }

        tracing::debug!(
            timeline_entries = pack.timeline.len(),
            reveal_messages = pack.reveal_pool.len(),
            "content pack loaded"
        );
        Ok(pack)
    }

    /// Loads the pack embedded in this build.
    ///
    /// # Panics
    ///
    /// Panics if the bundled YAML is malformed — a build defect, caught by
    /// the tests below.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_yaml(BUNDLED_SOURCE).expect("bundled content pack is validated by tests")
    }

    /// Returns the fingerprint of the bundled source.
    #[must_use]
    pub fn bundled_fingerprint() -> String {
        fingerprint(BUNDLED_SOURCE)
    }
}

/// Returns the hex SHA-256 fingerprint of a pack source.
///
/// Logged at session start so a rendered session can be traced back to the
/// exact content it shipped with.
#[must_use]
pub fn fingerprint(source: &str) -> String {
    let digest = Sha256::digest(source.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_pack_parses_and_validates() {
        let pack = ContentPack::bundled();

        assert!(!pack.timeline.is_empty());
        assert!(!pack.reveal_pool.is_empty());
        for entry in &pack.timeline {
            assert!(!entry.title.is_empty());
            assert!(!entry.text.is_empty());
        }
    }

    #[test]
    fn test_empty_timeline_is_rejected() {
        let source = "timeline: []\nreveal_pool:\n  - \"hello\"\n";

        let result = ContentPack::from_yaml(source);

        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_empty_reveal_pool_is_rejected() {
        let source = "timeline:\n  - title: \"a\"\n    text: \"b\"\nreveal_pool: []\n";

        let result = ContentPack::from_yaml(source);

        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let result = ContentPack::from_yaml("timeline: {not a list");

        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        let a = fingerprint("timeline: []");
        let b = fingerprint("timeline: []");
        let c = fingerprint("timeline: [ ]");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
