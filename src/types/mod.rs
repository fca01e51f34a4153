//! Shared response types.

mod response;

pub use response::{HealthResponse, NoContent};
