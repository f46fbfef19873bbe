//! Query handlers for the Narrative Progression context.

use serde::Serialize;

use keepsake_core::aggregate::AggregateRoot;

use crate::domain::aggregates::StoryProgress;
use crate::domain::events::ProposalOutcome;
use crate::domain::screen::Screen;

/// Read-only view of the story progression.
#[derive(Debug, Clone, Serialize)]
pub struct StoryProgressView {
    /// The screen currently presented.
    pub screen: Screen,
    /// Index of the most recently revealed affirmation, if any.
    pub reveal_index: Option<usize>,
    /// The proposal outcome.
    pub outcome: ProposalOutcome,
    /// Current version (event count).
    pub version: i64,
}

/// Projects the story aggregate into its read-only view.
#[must_use]
pub fn view_progress(story: &StoryProgress) -> StoryProgressView {
    StoryProgressView {
        screen: story.screen(),
        reveal_index: story.reveal_index(),
        outcome: story.outcome(),
        version: story.version(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::aggregate::AggregateRoot;
    use uuid::Uuid;

    #[test]
    fn test_view_reflects_fresh_story() {
        let story = StoryProgress::new(Uuid::new_v4());

        let view = view_progress(&story);

        assert_eq!(view.screen, Screen::Gate);
        assert!(view.reveal_index.is_none());
        assert_eq!(view.outcome, ProposalOutcome::Pending);
        assert_eq!(view.version, story.version());
    }
}
