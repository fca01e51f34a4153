//! HTTP request handlers.

pub mod example_handler;
pub mod listing_handler;

pub use example_handler::example_routes;
pub use listing_handler::listing_routes;
