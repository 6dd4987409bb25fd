//! Domain error types.

use thiserror::Error;

/// Errors raised while building or interpreting domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown role code: {0}")]
    UnknownRole(String),

    #[error("Unknown question type: {0}")]
    UnknownQuestionType(String),
}
