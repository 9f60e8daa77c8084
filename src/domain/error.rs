//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed or inconsistent organisation data.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("unknown employee id: {0}")]
    UnknownIdentifier(String),

    #[error("duplicate employee id: {0}")]
    DuplicateIdentifier(String),

    #[error("employees {left} and {right} share no common manager")]
    NoCommonAncestor { left: String, right: String },

    #[error("cycle detected in management chain at employee id: {0}")]
    CycleDetected(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
