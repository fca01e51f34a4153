//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Whether the listing store starts with the sample set
pub const DEFAULT_SEED_SAMPLE_LISTINGS: bool = false;

// =============================================================================
// Routing
// =============================================================================

/// Prefix for every versioned resource route
pub const API_PREFIX: &str = "/api/v1";

/// Swagger UI mount point
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Location of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
