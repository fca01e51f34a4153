//! In-memory example repository with email uniqueness.

use chrono::Utc;

use super::base::{MemoryTable, Table};
use crate::domain::{DomainError, DomainResult, Example, NewExample};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "example";

/// Example repository trait for dependency injection.
///
/// Every call is synchronous and bounded; returned records are owned
/// copies, never views into the store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ExampleRepository: Send + Sync {
    /// Validate, assign the next identity, stamp both timestamps and store
    fn create(&self, input: NewExample) -> DomainResult<Example>;

    /// Find example by ID
    fn get_by_id(&self, id: i64) -> DomainResult<Example>;

    /// Snapshot of every stored example, in no particular order
    fn get_all(&self) -> Vec<Example>;

    /// Replace the stored example, keeping its creation timestamp
    fn update(&self, id: i64, input: NewExample) -> DomainResult<Example>;

    /// Remove the example permanently; its identity is never reused
    fn delete(&self, id: i64) -> DomainResult<()>;
}

/// Concrete in-memory implementation of ExampleRepository
#[derive(Debug, Default)]
pub struct ExampleStore {
    table: MemoryTable<Example>,
}

impl ExampleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether any record other than `except` already uses `email`.
fn email_taken(table: &Table<Example>, email: &str, except: Option<i64>) -> bool {
    table
        .iter()
        .any(|(id, row)| Some(id) != except && row.email == email)
}

impl ExampleRepository for ExampleStore {
    fn create(&self, input: NewExample) -> DomainResult<Example> {
        let mut table = self.table.write();

        input.validate()?;
        if email_taken(&table, &input.email, None) {
            return Err(DomainError::conflict("email"));
        }

        table.insert_with(|id| Ok(Example::new(id, input, Utc::now())))
    }

    fn get_by_id(&self, id: i64) -> DomainResult<Example> {
        self.table
            .read()
            .get(id)
            .cloned()
            .ok_or(DomainError::not_found(ENTITY, id))
    }

    fn get_all(&self) -> Vec<Example> {
        self.table.read().snapshot()
    }

    fn update(&self, id: i64, input: NewExample) -> DomainResult<Example> {
        let mut table = self.table.write();

        input.validate()?;
        let created_at = table
            .get(id)
            .map(|existing| existing.created_at)
            .ok_or(DomainError::not_found(ENTITY, id))?;
        if email_taken(&table, &input.email, Some(id)) {
            return Err(DomainError::conflict("email"));
        }

        let example = Example {
            id,
            name: input.name,
            email: input.email,
            created_at,
            updated_at: Utc::now(),
        };
        table.replace(id, example.clone());
        Ok(example)
    }

    fn delete(&self, id: i64) -> DomainResult<()> {
        self.table
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::not_found(ENTITY, id))
    }
}
