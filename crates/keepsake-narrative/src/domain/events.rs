//! Domain events for the Narrative Progression context.

use keepsake_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::screen::Screen;

/// The two affirmatives offered on the proposal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalChoice {
    /// The plain affirmative.
    Yes,
    /// The stronger affirmative; celebrated with a longer burst.
    Always,
}

impl ProposalChoice {
    /// Whether this choice amplifies the celebration burst.
    #[must_use]
    pub fn amplified(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// The proposal's session-terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalOutcome {
    /// No choice made yet.
    Pending,
    /// Settled with [`ProposalChoice::Yes`].
    Yes,
    /// Settled with [`ProposalChoice::Always`].
    Always,
}

impl From<ProposalChoice> for ProposalOutcome {
    fn from(choice: ProposalChoice) -> Self {
        match choice {
            ProposalChoice::Yes => Self::Yes,
            ProposalChoice::Always => Self::Always,
        }
    }
}

/// Emitted when the screen pointer moves forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenAdvanced {
    /// The screen being left.
    pub from: Screen,
    /// The screen being entered.
    pub to: Screen,
}

/// Emitted when a fresh affirmation is drawn from the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRevealed {
    /// Index into the static reveal pool.
    pub index: usize,
}

/// Emitted when the proposal is settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeChosen {
    /// The affirmative the viewer picked.
    pub choice: ProposalChoice,
}

/// Event payload variants for the Narrative Progression context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoryEventKind {
    /// The gate has been cleared; Gate→Welcome becomes legal.
    EntryGranted,
    /// The screen pointer moved forward.
    ScreenAdvanced(ScreenAdvanced),
    /// A fresh affirmation was drawn.
    MessageRevealed(MessageRevealed),
    /// The proposal was settled.
    OutcomeChosen(OutcomeChosen),
}

/// Domain event envelope for the Narrative Progression context.
#[derive(Debug, Clone)]
pub struct StoryEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: StoryEventKind,
}

impl DomainEvent for StoryEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            StoryEventKind::EntryGranted => "story.entry_granted",
            StoryEventKind::ScreenAdvanced(_) => "story.screen_advanced",
            StoryEventKind::MessageRevealed(_) => "story.message_revealed",
            StoryEventKind::OutcomeChosen(_) => "story.outcome_chosen",
        }
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
