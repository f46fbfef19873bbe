//! Commands for the Gate Access context.

use keepsake_core::command::Command;
use uuid::Uuid;

/// Command to submit an answer for the gate's current step.
#[derive(Debug, Clone)]
pub struct SubmitAnswer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The viewer's raw answer, untrimmed.
    pub answer: String,
}

impl Command for SubmitAnswer {
    fn command_type(&self) -> &'static str {
        "gate.submit_answer"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
