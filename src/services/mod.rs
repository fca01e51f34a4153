//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repositories to fulfill
//! application use cases. They depend on repository traits, never on
//! the concrete stores.

pub mod container;
mod example_service;
mod listing_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use example_service::{ExampleManager, ExampleService};
pub use listing_service::{ListingManager, ListingService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
