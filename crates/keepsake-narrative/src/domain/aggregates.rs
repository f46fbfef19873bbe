//! Aggregate roots for the Narrative Progression context.

use keepsake_core::aggregate::AggregateRoot;
use keepsake_core::clock::Clock;
use keepsake_core::error::DomainError;
use keepsake_core::event::EventMetadata;
use keepsake_core::rng::RandomSource;
use uuid::Uuid;

use super::events::{
    MessageRevealed, OutcomeChosen, ProposalChoice, ProposalOutcome, ScreenAdvanced, StoryEvent,
    StoryEventKind,
};
use super::screen::Screen;

/// The aggregate root for the story's progression.
#[derive(Debug)]
pub struct StoryProgress {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// The screen currently presented.
    pub(crate) screen: Screen,
    /// Whether the gate has been cleared.
    pub(crate) entry_granted: bool,
    /// Index of the most recently revealed affirmation.
    pub(crate) reveal_index: Option<usize>,
    /// The proposal's outcome. Terminal once set.
    pub(crate) outcome: ProposalOutcome,
    /// Uncommitted events pending application.
    uncommitted_events: Vec<StoryEvent>,
}

impl StoryProgress {
    /// Creates a new progression at the gate screen.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            screen: Screen::Gate,
            entry_granted: false,
            reveal_index: None,
            outcome: ProposalOutcome::Pending,
            uncommitted_events: Vec::new(),
        }
    }

    /// Returns the screen currently presented.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns whether the gate has been cleared.
    #[must_use]
    pub fn entry_granted(&self) -> bool {
        self.entry_granted
    }

    /// Returns the index of the most recently revealed affirmation.
    #[must_use]
    pub fn reveal_index(&self) -> Option<usize> {
        self.reveal_index
    }

    /// Returns the proposal outcome.
    #[must_use]
    pub fn outcome(&self) -> ProposalOutcome {
        self.outcome
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    fn record(&mut self, kind: StoryEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = StoryEvent {
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

    /// Records that the gate has been cleared, producing `EntryGranted`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if entry was already granted.
    pub fn grant_entry(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.entry_granted {
            return Err(DomainError::Validation(
                "entry has already been granted".to_owned(),
            ));
        }

        self.record(StoryEventKind::EntryGranted, correlation_id, clock);
        Ok(())
    }

    /// Advances to `to`, producing `ScreenAdvanced`.
    ///
    /// Only the immediate successor of the current screen is legal, and
    /// leaving the gate additionally requires granted entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Transition` for any backward, repeated, or
    /// skipping target, and for Gate→Welcome while the gate is locked.
    pub fn advance(
        &mut self,
        to: Screen,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let Some(next) = self.screen.next() else {
            return Err(DomainError::Transition(
                "the story has reached its final screen".to_owned(),
            ));
        };
        if to != next {
            return Err(DomainError::Transition(format!(
                "cannot advance from {:?} to {to:?}",
                self.screen
            )));
        }
        if self.screen == Screen::Gate && !self.entry_granted {
            return Err(DomainError::Transition(
                "the gate has not been unlocked".to_owned(),
            ));
        }

        self.record(
            StoryEventKind::ScreenAdvanced(ScreenAdvanced {
                from: self.screen,
                to,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Draws one affirmation uniformly from a pool of `pool_size` entries,
    /// producing `MessageRevealed`.
    ///
    /// Draws are independent — repeats are allowed and each draw replaces
    /// the previous selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Transition` off the reveal screen and
    /// `DomainError::Validation` for an empty pool.
    pub fn reveal(
        &mut self,
        pool_size: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn RandomSource,
    ) -> Result<(), DomainError> {
        if self.screen != Screen::Reveal {
            return Err(DomainError::Transition(format!(
                "cannot reveal a message on the {:?} screen",
                self.screen
            )));
        }
        if pool_size == 0 {
            return Err(DomainError::Validation(
                "the reveal pool is empty".to_owned(),
            ));
        }

        let index = rng.pick_index(pool_size);
        self.record(
            StoryEventKind::MessageRevealed(MessageRevealed { index }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Settles the proposal, producing `OutcomeChosen`. Terminal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Transition` off the proposal screen and
    /// `DomainError::Validation` once an outcome is already set.
    pub fn choose(
        &mut self,
        choice: ProposalChoice,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.screen != Screen::Proposal {
            return Err(DomainError::Transition(format!(
                "cannot choose an outcome on the {:?} screen",
                self.screen
            )));
        }
        if self.outcome != ProposalOutcome::Pending {
            return Err(DomainError::Validation(
                "the outcome has already been chosen".to_owned(),
            ));
        }

        self.record(
            StoryEventKind::OutcomeChosen(OutcomeChosen { choice }),
            correlation_id,
            clock,
        );
        Ok(())
    }
}

impl AggregateRoot for StoryProgress {
    type Event = StoryEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            StoryEventKind::EntryGranted => {
                self.entry_granted = true;
            }
            StoryEventKind::ScreenAdvanced(payload) => {
                self.screen = payload.to;
            }
            StoryEventKind::MessageRevealed(payload) => {
                self.reveal_index = Some(payload.index);
            }
            StoryEventKind::OutcomeChosen(payload) => {
                self.outcome = payload.choice.into();
            }
        }
        self.version += 1;
    }

    fn take_uncommitted(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
