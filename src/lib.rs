//! Property API - In-memory example records and property listings
//!
//! Two thread-safe in-memory stores (a minimal example entity with a
//! unique email, and property listings with filtered queries) exposed
//! over a REST API built with Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, their validation rules and domain errors
//! - **infra**: In-memory repositories
//! - **services**: Application use cases
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start with the sample listings on another port
//! cargo run -- serve --port 8080 --seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Example, Listing, NewExample, NewListing};
pub use errors::{AppError, AppResult};
