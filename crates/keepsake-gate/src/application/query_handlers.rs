//! Query handlers for the Gate Access context.

use serde::Serialize;

use crate::domain::aggregates::GateAccess;
use crate::domain::events::GateStep;

/// Read-only view of the gate, consumed by the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct GateView {
    /// The step the gate is currently asking.
    pub step: GateStep,
    /// The rejection message from the most recent failed attempt.
    pub error: Option<String>,
    /// Whether the gate has been unlocked.
    pub unlocked: bool,
}

/// Projects the gate aggregate into its read-only view.
#[must_use]
pub fn view_gate(gate: &GateAccess) -> GateView {
    GateView {
        step: gate.step(),
        error: gate.error().map(str::to_owned),
        unlocked: gate.unlocked(),
    }
}
