//! Infrastructure layer - Record storage
//!
//! Records live in process memory for the lifetime of the server; nothing
//! is persisted across restarts.

pub mod repositories;

pub use repositories::{ExampleRepository, ExampleStore, ListingRepository, ListingStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockExampleRepository, MockListingRepository};
