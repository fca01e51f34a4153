//! Property listing handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::extractors::{IdPath, JsonBody, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{Listing, NewListing};
use crate::errors::AppResult;
use crate::types::NoContent;

/// City search parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CitySearchQuery {
    /// Case-insensitive fragment of the city name
    #[validate(length(min = 1, message = "city is required"))]
    #[param(example = "lon")]
    pub city: String,
}

/// Inclusive price bounds in minor currency units
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceRangeQuery {
    #[validate(range(min = 0, message = "min must not be negative"))]
    #[param(example = 10000000)]
    pub min: i64,
    #[param(example = 15000000)]
    pub max: i64,
}

/// Inclusive room-count bounds
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomRangeQuery {
    #[param(example = 1)]
    pub min: u32,
    #[param(example = 3)]
    pub max: u32,
}

/// Create listing routes
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_listing).get(list_listings))
        .route("/featured", get(featured_listings))
        .route("/search", get(search_listings))
        .route("/region/:region", get(listings_by_region))
        .route("/type/:property_type", get(listings_by_property_type))
        .route("/price", get(listings_by_price))
        .route("/bedrooms", get(listings_by_bedrooms))
        .route("/bathrooms", get(listings_by_bathrooms))
        .route(
            "/:id",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
}

/// Create a new listing
#[utoipa::path(
    post,
    path = "/api/v1/listings",
    tag = "Listings",
    request_body = NewListing,
    responses(
        (status = 201, description = "Listing created", body = Listing),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_listing(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewListing>,
) -> AppResult<(StatusCode, Json<Listing>)> {
    let listing = state.listing_service.create_listing(payload).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// List all listings
#[utoipa::path(
    get,
    path = "/api/v1/listings",
    tag = "Listings",
    responses(
        (status = 200, description = "All listings", body = [Listing])
    )
)]
pub async fn list_listings(State(state): State<AppState>) -> AppResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.list_listings().await?))
}

/// Get listing by ID
#[utoipa::path(
    get,
    path = "/api/v1/listings/{id}",
    tag = "Listings",
    params(("id" = i64, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Listing found", body = Listing),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn get_listing(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Listing>> {
    Ok(Json(state.listing_service.get_listing(id).await?))
}

/// Replace a listing
///
/// Omitting `made_visible_at` keeps the stored value.
#[utoipa::path(
    put,
    path = "/api/v1/listings/{id}",
    tag = "Listings",
    params(("id" = i64, Path, description = "Listing ID")),
    request_body = NewListing,
    responses(
        (status = 200, description = "Listing updated", body = Listing),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn update_listing(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<NewListing>,
) -> AppResult<Json<Listing>> {
    Ok(Json(state.listing_service.update_listing(id, payload).await?))
}

/// Delete a listing
#[utoipa::path(
    delete,
    path = "/api/v1/listings/{id}",
    tag = "Listings",
    params(("id" = i64, Path, description = "Listing ID")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<NoContent> {
    state.listing_service.delete_listing(id).await?;
    Ok(NoContent)
}

/// Featured listings
#[utoipa::path(
    get,
    path = "/api/v1/listings/featured",
    tag = "Listings",
    responses(
        (status = 200, description = "Featured listings", body = [Listing])
    )
)]
pub async fn featured_listings(State(state): State<AppState>) -> AppResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.featured_listings().await?))
}

/// Search listings by city
#[utoipa::path(
    get,
    path = "/api/v1/listings/search",
    tag = "Listings",
    params(CitySearchQuery),
    responses(
        (status = 200, description = "Listings whose city contains the query", body = [Listing]),
        (status = 400, description = "Missing city")
    )
)]
pub async fn search_listings(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<CitySearchQuery>,
) -> AppResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.search_by_city(&query.city).await?))
}

/// Listings in a region
#[utoipa::path(
    get,
    path = "/api/v1/listings/region/{region}",
    tag = "Listings",
    params(("region" = String, Path, description = "Region name, e.g. South East")),
    responses(
        (status = 200, description = "Listings in the region", body = [Listing])
    )
)]
pub async fn listings_by_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.listings_by_region(&region).await?))
}

/// Listings of a property type
#[utoipa::path(
    get,
    path = "/api/v1/listings/type/{property_type}",
    tag = "Listings",
    params(("property_type" = String, Path, description = "Property type, e.g. apartment")),
    responses(
        (status = 200, description = "Listings of the type", body = [Listing])
    )
)]
pub async fn listings_by_property_type(
    State(state): State<AppState>,
    Path(property_type): Path<String>,
) -> AppResult<Json<Vec<Listing>>> {
    let listings = state
        .listing_service
        .listings_by_property_type(&property_type)
        .await?;
    Ok(Json(listings))
}

/// Listings within a price range
#[utoipa::path(
    get,
    path = "/api/v1/listings/price",
    tag = "Listings",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Listings priced within the range", body = [Listing]),
        (status = 400, description = "Invalid range")
    )
)]
pub async fn listings_by_price(
    State(state): State<AppState>,
    ValidatedQuery(range): ValidatedQuery<PriceRangeQuery>,
) -> AppResult<Json<Vec<Listing>>> {
    let listings = state
        .listing_service
        .listings_by_price_range(range.min, range.max)
        .await?;
    Ok(Json(listings))
}

/// Listings within a bedroom range
#[utoipa::path(
    get,
    path = "/api/v1/listings/bedrooms",
    tag = "Listings",
    params(RoomRangeQuery),
    responses(
        (status = 200, description = "Listings with a bedroom count in range", body = [Listing]),
        (status = 400, description = "Invalid range")
    )
)]
pub async fn listings_by_bedrooms(
    State(state): State<AppState>,
    ValidatedQuery(range): ValidatedQuery<RoomRangeQuery>,
) -> AppResult<Json<Vec<Listing>>> {
    let listings = state
        .listing_service
        .listings_by_bedrooms(range.min, range.max)
        .await?;
    Ok(Json(listings))
}

/// Listings within a bathroom range
#[utoipa::path(
    get,
    path = "/api/v1/listings/bathrooms",
    tag = "Listings",
    params(RoomRangeQuery),
    responses(
        (status = 200, description = "Listings with a bathroom count in range", body = [Listing]),
        (status = 400, description = "Invalid range")
    )
)]
pub async fn listings_by_bathrooms(
    State(state): State<AppState>,
    ValidatedQuery(range): ValidatedQuery<RoomRangeQuery>,
) -> AppResult<Json<Vec<Listing>>> {
    let listings = state
        .listing_service
        .listings_by_bathrooms(range.min, range.max)
        .await?;
    Ok(Json(listings))
}
