//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Errors
/// surface directly to the caller (no retry, no recovery) and are caught only
/// at the outermost reporting boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was given nothing to work on (zero orders, zero products).
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A well-formed query produced no qualifying result.
    #[error("not found")]
    NotFound,

    /// A value failed validation (e.g. an order naming an unregistered
    /// customer or product).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
