//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{example_handler, listing_handler};
use crate::domain::{
    AddressDetails, Example, Listing, NewAddress, NewListing, Photo, PropertyType, Region,
};

/// OpenAPI documentation for the Property API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property API",
        version = "0.1.0",
        description = "In-memory example records and property listings",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Example endpoints
        example_handler::create_example,
        example_handler::list_examples,
        example_handler::get_example,
        example_handler::update_example,
        example_handler::delete_example,
        // Listing endpoints
        listing_handler::create_listing,
        listing_handler::list_listings,
        listing_handler::get_listing,
        listing_handler::update_listing,
        listing_handler::delete_listing,
        listing_handler::featured_listings,
        listing_handler::search_listings,
        listing_handler::listings_by_region,
        listing_handler::listings_by_property_type,
        listing_handler::listings_by_price,
        listing_handler::listings_by_bedrooms,
        listing_handler::listings_by_bathrooms,
    ),
    components(
        schemas(
            // Domain types
            Example,
            Listing,
            NewListing,
            AddressDetails,
            NewAddress,
            Photo,
            Region,
            PropertyType,
            // Request types
            example_handler::CreateExampleRequest,
            example_handler::UpdateExampleRequest,
        )
    ),
    tags(
        (name = "Examples", description = "Example record management"),
        (name = "Listings", description = "Property listing management and search")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_listing_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/examples/{id}",
            "/api/v1/listings/search",
            "/api/v1/listings/region/{region}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
