//! Aggregate roots for the Gate Access context.

use keepsake_core::aggregate::AggregateRoot;
use keepsake_core::clock::Clock;
use keepsake_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{AnswerRejected, GateEvent, GateEventKind, GateStep};

/// The year the story began. Matched as an exact string — "02022" or
/// "2022 AD" do not pass.
const SECRET_YEAR: &str = "2022";

/// The city where it began. Matched case-insensitively after trimming.
const SECRET_CITY: &str = "grenoble";

const YEAR_REJECTION: &str = "Hmm… try again. Think about when everything changed 🌸";
const CITY_REJECTION: &str = "Not quite… think about the city where destiny worked overtime 🚲";

/// The aggregate root for the access gate.
#[derive(Debug)]
pub struct GateAccess {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// The step the gate is currently asking.
    pub(crate) step: GateStep,
    /// The rejection message from the most recent failed attempt.
    pub(crate) error: Option<String>,
    /// Whether the gate has been unlocked. Never resets.
    pub(crate) unlocked: bool,
    /// Uncommitted events pending application.
    uncommitted_events: Vec<GateEvent>,
}

impl GateAccess {
    /// Creates a new gate at the year step, locked, with no error.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            step: GateStep::Year,
            error: None,
            unlocked: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// Returns the step the gate is currently asking.
    #[must_use]
    pub fn step(&self) -> GateStep {
        self.step
    }

    /// Returns the rejection message from the most recent failed attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether the gate has been unlocked.
    #[must_use]
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    fn record(&mut self, kind: GateEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = GateEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.uncommitted_events.push(event);
    }

    /// Checks `answer` against the current step's secret.
    ///
    /// Any prior rejection is superseded by this attempt's outcome: a
    /// success clears it, a failure overwrites it. Submitting against an
    /// already-unlocked gate produces no events.
    pub fn submit(&mut self, answer: &str, correlation_id: Uuid, clock: &dyn Clock) {
        if self.unlocked {
            tracing::debug!(gate_id = %self.id, "ignoring submission against unlocked gate");
            return;
        }

        let kind = match self.step {
            GateStep::Year => {
                if answer.trim() == SECRET_YEAR {
                    GateEventKind::YearAccepted
                } else {
                    GateEventKind::AnswerRejected(AnswerRejected {
                        step: GateStep::Year,
                        message: YEAR_REJECTION.to_owned(),
                    })
                }
            }
            GateStep::City => {
                if answer.trim().to_lowercase() == SECRET_CITY {
                    GateEventKind::Unlocked
                } else {
                    GateEventKind::AnswerRejected(AnswerRejected {
                        step: GateStep::City,
                        message: CITY_REJECTION.to_owned(),
                    })
                }
            }
        };

        self.record(kind, correlation_id, clock);
    }
}

impl AggregateRoot for GateAccess {
    type Event = GateEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            GateEventKind::AnswerRejected(payload) => {
                self.error = Some(payload.message.clone());
            }
            GateEventKind::YearAccepted => {
                self.step = GateStep::City;
                self.error = None;
            }
            GateEventKind::Unlocked => {
                self.unlocked = true;
                self.error = None;
            }
        }
        self.version += 1;
    }

    fn take_uncommitted(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
