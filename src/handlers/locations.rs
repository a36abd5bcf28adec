use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::ApiError;
use crate::handlers::common::{map_service_error, success_response, validate_input};
use crate::services::locations::LocationEdit;
use crate::AppState;

/// Locations are generated and removed with their rack; only descriptive
/// fields are editable here.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 100))]
    pub zone: String,
    #[validate(range(min = 0))]
    pub capacity: i32,
    #[validate(length(max = 500))]
    pub description: String,
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .locations
        .get_location(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Location {} not found", id)))?;

    success_response(found)
}

async fn list_locations_by_rack(
    State(state): State<AppState>,
    Path(rack_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let locations = state
        .services
        .locations
        .list_by_rack(rack_id)
        .await
        .map_err(map_service_error)?;

    success_response(locations)
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .locations
        .update_location(
            id,
            LocationEdit {
                zone: payload.zone,
                capacity: payload.capacity,
                description: payload.description,
            },
        )
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Location updated successfully" }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_location).put(update_location))
        .route("/rack/:rack_id", get(list_locations_by_rack))
}
