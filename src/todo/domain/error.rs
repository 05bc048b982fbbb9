//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo title is empty after trimming.
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The todo identifier is not a positive integer.
    #[error("invalid todo identifier {0}, expected a positive integer")]
    InvalidId(u64),
}
