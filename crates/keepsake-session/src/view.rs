//! Observable views published to the rendering layer.

use serde::Serialize;
use uuid::Uuid;

use keepsake_gate::application::query_handlers::GateView;
use keepsake_narrative::domain::events::ProposalOutcome;
use keepsake_narrative::domain::screen::Screen;

/// The currently revealed affirmation, resolved against the content pack.
#[derive(Debug, Clone, Serialize)]
pub struct RevealView {
    /// Index into the reveal pool.
    pub index: usize,
    /// The affirmation text.
    pub text: String,
}

/// Snapshot of everything the rendering layer draws from, republished on
/// every state change.
#[derive(Debug, Clone, Serialize)]
pub struct StoryView {
    /// The session identifier.
    pub session_id: Uuid,
    /// The screen currently presented.
    pub screen: Screen,
    /// The gate's step, error message, and unlock state.
    pub gate: GateView,
    /// The most recently revealed affirmation, if any.
    pub reveal: Option<RevealView>,
    /// The proposal outcome.
    pub outcome: ProposalOutcome,
    /// Whether the transient "link copied" indicator is showing.
    pub link_copied: bool,
}
