//! Command handlers for the Narrative Progression context.
//!
//! Handlers execute the command against the in-memory aggregate, apply the
//! produced events, and return them for the session runtime to fold into
//! published views.

use keepsake_core::aggregate::AggregateRoot;
use keepsake_core::clock::Clock;
use keepsake_core::command::Command;
use keepsake_core::error::DomainError;
use keepsake_core::rng::RandomSource;

use crate::domain::aggregates::StoryProgress;
use crate::domain::commands::{AdvanceScreen, ChooseOutcome, GrantEntry, RevealMessage};
use crate::domain::events::StoryEvent;

fn drain_applied(story: &mut StoryProgress) -> Vec<StoryEvent> {
    let events = story.take_uncommitted();
    for event in &events {
        story.apply(event);
    }
    events
}

fn trace_command(command: &dyn Command) {
    tracing::debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        "handling story command"
    );
}

/// Handles the `GrantEntry` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if entry was already granted.
pub fn handle_grant_entry(
    command: &GrantEntry,
    story: &mut StoryProgress,
    clock: &dyn Clock,
) -> Result<Vec<StoryEvent>, DomainError> {
    trace_command(command);
    story.grant_entry(command.correlation_id, clock)?;
    Ok(drain_applied(story))
}

/// Handles the `AdvanceScreen` command.
///
/// # Errors
///
/// Returns `DomainError::Transition` for out-of-order targets.
pub fn handle_advance_screen(
    command: &AdvanceScreen,
    story: &mut StoryProgress,
    clock: &dyn Clock,
) -> Result<Vec<StoryEvent>, DomainError> {
    trace_command(command);
    story.advance(command.to, command.correlation_id, clock)?;
    Ok(drain_applied(story))
}

/// Handles the `RevealMessage` command.
///
/// # Errors
///
/// Returns `DomainError::Transition` off the reveal screen and
/// `DomainError::Validation` for an empty pool.
pub fn handle_reveal_message(
    command: &RevealMessage,
    story: &mut StoryProgress,
    pool_size: usize,
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> Result<Vec<StoryEvent>, DomainError> {
    trace_command(command);
    story.reveal(pool_size, command.correlation_id, clock, rng)?;
    Ok(drain_applied(story))
}

/// Handles the `ChooseOutcome` command.
///
/// # Errors
///
/// Returns `DomainError::Transition` off the proposal screen and
/// `DomainError::Validation` once the outcome is settled.
pub fn handle_choose_outcome(
    command: &ChooseOutcome,
    story: &mut StoryProgress,
    clock: &dyn Clock,
) -> Result<Vec<StoryEvent>, DomainError> {
    trace_command(command);
    story.choose(command.choice, command.correlation_id, clock)?;
    Ok(drain_applied(story))
}
