//! Example entity: a named contact with a unique email address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{DomainError, DomainResult};

/// Example domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Example {
    /// Identity assigned by the store on creation
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address, unique across live records
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Creation timestamp, never changes after creation
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

impl Example {
    /// Build a freshly created record; both timestamps are `now`.
    pub(crate) fn new(id: i64, input: NewExample, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Caller-supplied fields for creating or replacing an example.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewExample {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl NewExample {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check the required fields.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.email.is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        Ok(())
    }
}
