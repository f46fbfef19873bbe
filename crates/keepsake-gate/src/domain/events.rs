//! Domain events for the Gate Access context.

use keepsake_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// The gate's two sequential steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStep {
    /// Asking for the year the story began.
    Year,
    /// Asking for the city where it began.
    City,
}

/// Emitted when an answer fails the current step's check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRejected {
    /// The step the answer was checked against.
    pub step: GateStep,
    /// The fixed encouragement message for that step.
    pub message: String,
}

/// Event payload variants for the Gate Access context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GateEventKind {
    /// An answer failed the current step's check.
    AnswerRejected(AnswerRejected),
    /// The year answer matched; the gate moved to the city step.
    YearAccepted,
    /// The city answer matched; the gate is permanently unlocked.
    Unlocked,
}

/// Domain event envelope for the Gate Access context.
#[derive(Debug, Clone)]
pub struct GateEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: GateEventKind,
}

impl DomainEvent for GateEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            GateEventKind::AnswerRejected(_) => "gate.answer_rejected",
            GateEventKind::YearAccepted => "gate.year_accepted",
            GateEventKind::Unlocked => "gate.unlocked",
        }
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
