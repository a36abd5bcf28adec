use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::ApiError;
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse, PaginationParams,
};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let id = state
        .services
        .categories
        .create_category(payload.name, payload.description)
        .await
        .map_err(map_service_error)?;

    created_response(json!({ "id": id, "message": "Category created successfully" }))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .categories
        .get_category(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Category {} not found", id)))?;

    success_response(found)
}

async fn list_categories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let (items, total) = state
        .services
        .categories
        .list_categories(pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .categories
        .update_category(id, payload.name, payload.description)
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Category updated successfully" }))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .categories
        .delete_category(id)
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
