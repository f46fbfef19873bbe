//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregate roots whose state is mutated only by applying events.
///
/// Command methods push uncommitted events; the application layer drains
/// them with [`AggregateRoot::take_uncommitted`], applies each one, and
/// hands them to the session runtime for view publication.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Drains the uncommitted events produced by command handling.
    fn take_uncommitted(&mut self) -> Vec<Self::Event>;
}
