//! Repository layer - Data access abstraction
//!
//! Repositories hide how records are kept behind traits, so services can
//! be tested against mocks and the in-memory stores can be swapped out.

mod base;
mod example_repository;
mod listing_repository;
mod sample_listings;

pub use example_repository::{ExampleRepository, ExampleStore};
pub use listing_repository::{ListingRepository, ListingStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use example_repository::MockExampleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use listing_repository::MockListingRepository;
