use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::commands::racks::{
    CreateRackCommand, DeleteRackCommand, RotateRackCommand, UpdateRackCommand,
};
use crate::errors::ApiError;
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRackRequest {
    pub blueprint_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Requested top-left X in meters, snapped to the blueprint grid
    pub position_x: Decimal,
    /// Requested top-left Y in meters, snapped to the blueprint grid
    pub position_y: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    #[validate(range(min = 1, max = 100))]
    pub rows: i32,
    #[validate(range(min = 1, max = 100))]
    pub grids: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRackRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub position_x: Decimal,
    pub position_y: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    #[validate(range(min = 1, max = 100))]
    pub rows: i32,
    #[validate(range(min = 1, max = 100))]
    pub grids: i32,
}

#[utoipa::path(
    post,
    path = "/api/v1/racks",
    request_body = CreateRackRequest,
    responses(
        (status = 201, description = "Rack created and storage locations generated"),
        (status = 404, description = "Blueprint not found"),
        (status = 409, description = "Rack overlaps an existing rack"),
        (status = 422, description = "Rack extends beyond the blueprint bounds")
    ),
    tag = "racks"
)]
pub async fn create_rack(
    State(state): State<AppState>,
    Json(payload): Json<CreateRackRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let result = state
        .services
        .racks
        .create_rack(CreateRackCommand {
            blueprint_id: payload.blueprint_id,
            name: payload.name,
            position_x: payload.position_x,
            position_y: payload.position_y,
            width: payload.width,
            height: payload.height,
            rows: payload.rows,
            grids: payload.grids,
        })
        .await
        .map_err(map_service_error)?;

    created_response(json!({
        "id": result.id,
        "location_count": result.location_count,
        "message": "Rack created successfully"
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/racks/{id}",
    params(("id" = Uuid, Path, description = "Rack id")),
    responses(
        (status = 200, description = "Rack found"),
        (status = 404, description = "Rack not found")
    ),
    tag = "racks"
)]
pub async fn get_rack(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .racks
        .get_rack(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Rack {} not found", id)))?;

    success_response(found)
}

#[utoipa::path(
    get,
    path = "/api/v1/racks/blueprint/{blueprint_id}",
    params(("blueprint_id" = Uuid, Path, description = "Blueprint id")),
    responses((status = 200, description = "Racks on the blueprint, ordered by name")),
    tag = "racks"
)]
pub async fn list_racks_by_blueprint(
    State(state): State<AppState>,
    Path(blueprint_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let racks = state
        .services
        .racks
        .list_by_blueprint(blueprint_id)
        .await
        .map_err(map_service_error)?;

    success_response(racks)
}

#[utoipa::path(
    put,
    path = "/api/v1/racks/{id}",
    request_body = UpdateRackRequest,
    params(("id" = Uuid, Path, description = "Rack id")),
    responses(
        (status = 200, description = "Rack updated"),
        (status = 404, description = "Rack not found"),
        (status = 409, description = "New footprint overlaps an existing rack"),
        (status = 422, description = "New footprint extends beyond the blueprint bounds")
    ),
    tag = "racks"
)]
pub async fn update_rack(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRackRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let result = state
        .services
        .racks
        .update_rack(UpdateRackCommand {
            id,
            name: payload.name,
            position_x: payload.position_x,
            position_y: payload.position_y,
            width: payload.width,
            height: payload.height,
            rows: payload.rows,
            grids: payload.grids,
        })
        .await
        .map_err(map_service_error)?;

    success_response(json!({
        "locations_regenerated": result.locations_regenerated,
        "message": "Rack updated successfully"
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/racks/{id}/rotate",
    params(("id" = Uuid, Path, description = "Rack id")),
    responses(
        (status = 200, description = "Rack rotated 90 degrees clockwise"),
        (status = 404, description = "Rack not found"),
        (status = 409, description = "Rotated footprint overlaps an existing rack"),
        (status = 422, description = "Rotated footprint extends beyond the blueprint bounds")
    ),
    tag = "racks"
)]
pub async fn rotate_rack(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let result = state
        .services
        .racks
        .rotate_rack(RotateRackCommand { id })
        .await
        .map_err(map_service_error)?;

    success_response(json!({
        "rotation_degrees": result.rotation_degrees,
        "message": "Rack rotated successfully"
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/racks/{id}",
    params(("id" = Uuid, Path, description = "Rack id")),
    responses(
        (status = 204, description = "Rack and its locations deleted"),
        (status = 404, description = "Rack not found")
    ),
    tag = "racks"
)]
pub async fn delete_rack(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .racks
        .delete_rack(DeleteRackCommand { id })
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rack))
        .route("/:id", get(get_rack).put(update_rack).delete(delete_rack))
        .route("/:id/rotate", post(rotate_rack))
        .route("/blueprint/:blueprint_id", get(list_racks_by_blueprint))
}
