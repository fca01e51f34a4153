//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{ExampleService, ListingService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Example record service
    pub example_service: Arc<dyn ExampleService>,
    /// Property listing service
    pub listing_service: Arc<dyn ListingService>,
}

impl AppState {
    /// Create application state backed by fresh in-memory stores.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let services = Services::in_memory(config.seed_sample_listings)?;
        Ok(Self::from_container(&services))
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self::new(container.examples(), container.listings())
    }

    /// Create new application state with manually injected services.
    pub fn new(
        example_service: Arc<dyn ExampleService>,
        listing_service: Arc<dyn ListingService>,
    ) -> Self {
        Self {
            example_service,
            listing_service,
        }
    }
}
