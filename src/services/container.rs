//! Service Container - Centralized service access.
//!
//! Handlers depend on service traits only; the container decides which
//! implementations back them.

use std::sync::Arc;

use super::{ExampleManager, ExampleService, ListingManager, ListingService};
use crate::errors::{AppError, AppResult};
use crate::infra::{ExampleStore, ListingStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get example service
    fn examples(&self) -> Arc<dyn ExampleService>;

    /// Get listing service
    fn listings(&self) -> Arc<dyn ListingService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    example_service: Arc<dyn ExampleService>,
    listing_service: Arc<dyn ListingService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        example_service: Arc<dyn ExampleService>,
        listing_service: Arc<dyn ListingService>,
    ) -> Self {
        Self {
            example_service,
            listing_service,
        }
    }

    /// Create service container backed by fresh in-memory stores.
    ///
    /// With `seed_listings` the listing store starts with the sample set.
    pub fn in_memory(seed_listings: bool) -> AppResult<Self> {
        let listings = if seed_listings {
            ListingStore::seeded().map_err(|e| AppError::internal(format!("bad sample data: {e}")))?
        } else {
            ListingStore::new()
        };

        Ok(Self::new(
            Arc::new(ExampleManager::new(Arc::new(ExampleStore::new()))),
            Arc::new(ListingManager::new(Arc::new(listings))),
        ))
    }
}

impl ServiceContainer for Services {
    fn examples(&self) -> Arc<dyn ExampleService> {
        self.example_service.clone()
    }

    fn listings(&self) -> Arc<dyn ListingService> {
        self.listing_service.clone()
    }
}
