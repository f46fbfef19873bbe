//! Commands for the Narrative Progression context.

use keepsake_core::command::Command;
use uuid::Uuid;

use super::events::ProposalChoice;
use super::screen::Screen;

/// Command recording that the gate has been cleared.
#[derive(Debug, Clone)]
pub struct GrantEntry {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for GrantEntry {
    fn command_type(&self) -> &'static str {
        "story.grant_entry"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to advance to the next screen.
#[derive(Debug, Clone)]
pub struct AdvanceScreen {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target screen; must be the immediate successor.
    pub to: Screen,
}

impl Command for AdvanceScreen {
    fn command_type(&self) -> &'static str {
        "story.advance_screen"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to draw a fresh affirmation from the reveal pool.
#[derive(Debug, Clone)]
pub struct RevealMessage {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for RevealMessage {
    fn command_type(&self) -> &'static str {
        "story.reveal_message"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to settle the proposal.
#[derive(Debug, Clone)]
pub struct ChooseOutcome {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The affirmative the viewer picked.
    pub choice: ProposalChoice,
}

impl Command for ChooseOutcome {
    fn command_type(&self) -> &'static str {
        "story.choose_outcome"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
