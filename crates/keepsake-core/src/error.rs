//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Gate rejections are not errors — they are domain events that set an
/// error message in the gate view. `DomainError` covers contract
/// violations and runtime faults only.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A screen transition outside the fixed forward order.
    #[error("invalid transition: {0}")]
    Transition(String),

    /// A runtime fault (closed channel, disposed session).
    #[error("runtime error: {0}")]
    Runtime(String),
}
