//! Domain-level errors.
//!
//! These are the failures a repository reports to its caller. They carry
//! enough context to build a user-facing message and are independent of
//! HTTP concerns.

use thiserror::Error;

/// Failure kinds raised by the stores.
///
/// Every variant is raised before any state change, so a caller that
/// receives one can rely on the store being exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing/empty or a numeric field is out of range
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint would be violated
    #[error("{0} already exists")]
    Conflict(String),

    /// No record with the given identity exists
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(field: impl Into<String>) -> Self {
        DomainError::Conflict(field.into())
    }

    /// Create a not found error for the given entity name and identity
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DomainError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
