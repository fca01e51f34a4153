//! Example record handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::Example;
use crate::errors::AppResult;
use crate::types::NoContent;

/// Example creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExampleRequest {
    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Contact email, unique across examples
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "john@example.com")]
    pub email: String,
}

/// Example replacement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExampleRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Create example routes
pub fn example_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_example).get(list_examples))
        .route(
            "/:id",
            get(get_example).put(update_example).delete(delete_example),
        )
}

/// Create a new example
#[utoipa::path(
    post,
    path = "/api/v1/examples",
    tag = "Examples",
    request_body = CreateExampleRequest,
    responses(
        (status = 201, description = "Example created", body = Example),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_example(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateExampleRequest>,
) -> AppResult<(StatusCode, Json<Example>)> {
    let example = state
        .example_service
        .create_example(payload.name, payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(example)))
}

/// List all examples
#[utoipa::path(
    get,
    path = "/api/v1/examples",
    tag = "Examples",
    responses(
        (status = 200, description = "All examples", body = [Example])
    )
)]
pub async fn list_examples(State(state): State<AppState>) -> AppResult<Json<Vec<Example>>> {
    let examples = state.example_service.list_examples().await?;
    Ok(Json(examples))
}

/// Get example by ID
#[utoipa::path(
    get,
    path = "/api/v1/examples/{id}",
    tag = "Examples",
    params(("id" = i64, Path, description = "Example ID")),
    responses(
        (status = 200, description = "Example found", body = Example),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Example not found")
    )
)]
pub async fn get_example(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Example>> {
    let example = state.example_service.get_example(id).await?;
    Ok(Json(example))
}

/// Replace an example's name and email
#[utoipa::path(
    put,
    path = "/api/v1/examples/{id}",
    tag = "Examples",
    params(("id" = i64, Path, description = "Example ID")),
    request_body = UpdateExampleRequest,
    responses(
        (status = 200, description = "Example updated", body = Example),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Example not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_example(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateExampleRequest>,
) -> AppResult<Json<Example>> {
    let example = state
        .example_service
        .update_example(id, payload.name, payload.email)
        .await?;

    Ok(Json(example))
}

/// Delete an example
#[utoipa::path(
    delete,
    path = "/api/v1/examples/{id}",
    tag = "Examples",
    params(("id" = i64, Path, description = "Example ID")),
    responses(
        (status = 204, description = "Example deleted"),
        (status = 404, description = "Example not found")
    )
)]
pub async fn delete_example(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<NoContent> {
    state.example_service.delete_example(id).await?;
    Ok(NoContent)
}
