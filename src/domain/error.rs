//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A conversion was requested while no usable numeric temperature is held.
    #[error("invalid input: temperature is not a number")]
    InvalidInput,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
