//! Example service - Handles example record use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Example, NewExample};
use crate::errors::{AppError, AppResult};
use crate::infra::ExampleRepository;

/// Example service trait for dependency injection.
#[async_trait]
pub trait ExampleService: Send + Sync {
    /// Create a new example with a unique email
    async fn create_example(&self, name: String, email: String) -> AppResult<Example>;

    /// Get example by ID
    async fn get_example(&self, id: i64) -> AppResult<Example>;

    /// List all examples
    async fn list_examples(&self) -> AppResult<Vec<Example>>;

    /// Replace name and email of an existing example
    async fn update_example(&self, id: i64, name: String, email: String) -> AppResult<Example>;

    /// Permanently delete an example
    async fn delete_example(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ExampleService over a repository.
pub struct ExampleManager {
    repo: Arc<dyn ExampleRepository>,
}

impl ExampleManager {
    /// Create new example service instance
    pub fn new(repo: Arc<dyn ExampleRepository>) -> Self {
        Self { repo }
    }

    fn check_input(name: &str, email: &str) -> AppResult<()> {
        if name.is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if email.is_empty() {
            return Err(AppError::validation("email is required"));
        }
        Ok(())
    }
}

#[async_trait]
impl ExampleService for ExampleManager {
    async fn create_example(&self, name: String, email: String) -> AppResult<Example> {
        Self::check_input(&name, &email)?;

        let example = self.repo.create(NewExample::new(name, email))?;
        tracing::info!(id = example.id, "Example created");
        Ok(example)
    }

    async fn get_example(&self, id: i64) -> AppResult<Example> {
        Ok(self.repo.get_by_id(id)?)
    }

    async fn list_examples(&self) -> AppResult<Vec<Example>> {
        Ok(self.repo.get_all())
    }

    async fn update_example(&self, id: i64, name: String, email: String) -> AppResult<Example> {
        Self::check_input(&name, &email)?;

        let example = self.repo.update(id, NewExample::new(name, email))?;
        tracing::info!(id, "Example updated");
        Ok(example)
    }

    async fn delete_example(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id)?;
        tracing::info!(id, "Example deleted");
        Ok(())
    }
}
