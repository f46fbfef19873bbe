//! Staggered reveal schedule for the timeline screen.
//!
//! The timeline itself is static content; the only behavior it carries is
//! the linearly increasing per-entry reveal delay the renderer applies.

use std::time::Duration;

/// Gap between consecutive timeline entries becoming visible.
pub const STAGGER_STEP: Duration = Duration::from_millis(300);

/// Returns the visibility delay for the timeline entry at `index`.
#[must_use]
pub fn entry_delay(index: usize) -> Duration {
    STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_appears_immediately() {
        assert_eq!(entry_delay(0), Duration::ZERO);
    }

    #[test]
    fn test_delay_grows_linearly_with_index() {
        for index in 0..10 {
            assert_eq!(entry_delay(index), STAGGER_STEP * u32::try_from(index).unwrap());
        }
    }
}
