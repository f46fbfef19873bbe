//! Command handlers for the Gate Access context.
//!
//! Handlers execute the command against the in-memory aggregate, apply the
//! produced events, and return them for the session runtime to fold into
//! published views. There is no persistence step — the session is transient.

use keepsake_core::aggregate::AggregateRoot;
use keepsake_core::clock::Clock;
use keepsake_core::command::Command;

use crate::domain::aggregates::GateAccess;
use crate::domain::commands::SubmitAnswer;
use crate::domain::events::GateEvent;

/// Handles the `SubmitAnswer` command: checks the answer against the
/// current step and applies the resulting events.
///
/// Gate rejections are events, not errors, so this handler is infallible.
pub fn handle_submit_answer(
    command: &SubmitAnswer,
    gate: &mut GateAccess,
    clock: &dyn Clock,
) -> Vec<GateEvent> {
    tracing::debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        "handling gate submission"
    );

    gate.submit(&command.answer, command.correlation_id, clock);

    let events = gate.take_uncommitted();
    for event in &events {
        gate.apply(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use keepsake_core::event::DomainEvent;
    use keepsake_test_support::FixedClock;
    use uuid::Uuid;

    #[test]
    fn test_handle_submit_answer_applies_events_to_aggregate() {
        // Arrange
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 14, 18, 0, 0).unwrap());
        let mut gate = GateAccess::new(Uuid::new_v4());
        let command = SubmitAnswer {
            correlation_id: Uuid::new_v4(),
            answer: "2022".to_owned(),
        };

        // Act
        let events = handle_submit_answer(&command, &mut gate, &clock);

        // Assert — the event is both returned and already applied.
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "gate.year_accepted");
        assert_eq!(gate.version(), 1);
        assert!(gate.take_uncommitted().is_empty());
    }
}
