use axum::{
    extract::{Path, Query, State},
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

use crate::commands::blueprints::{
    CreateBlueprintCommand, DeleteBlueprintCommand, UpdateBlueprintCommand,
};
use crate::errors::ApiError;
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse, PaginationParams,
};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBlueprintRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Floor width in meters
    pub width: Decimal,
    /// Floor height in meters
    pub height: Decimal,
    /// Snapping unit in centimeters
    #[validate(range(min = 1))]
    pub grid_size: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBlueprintRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    #[validate(range(min = 1))]
    pub grid_size: i32,
}

#[utoipa::path(
    post,
    path = "/api/v1/blueprints",
    request_body = CreateBlueprintRequest,
    responses(
        (status = 201, description = "Blueprint created"),
        (status = 400, description = "Invalid dimensions or grid size")
    ),
    tag = "blueprints"
)]
pub async fn create_blueprint(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlueprintRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let result = state
        .services
        .blueprints
        .create_blueprint(CreateBlueprintCommand {
            name: payload.name,
            width: payload.width,
            height: payload.height,
            grid_size: payload.grid_size,
        })
        .await
        .map_err(map_service_error)?;

    created_response(json!({
        "id": result.id,
        "message": "Blueprint created successfully"
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/blueprints/{id}",
    params(("id" = Uuid, Path, description = "Blueprint id")),
    responses(
        (status = 200, description = "Blueprint found"),
        (status = 404, description = "Blueprint not found")
    ),
    tag = "blueprints"
)]
pub async fn get_blueprint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .blueprints
        .get_blueprint(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Blueprint {} not found", id)))?;

    success_response(found)
}

async fn list_blueprints(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let (items, total) = state
        .services
        .blueprints
        .list_blueprints(pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

async fn update_blueprint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlueprintRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .blueprints
        .update_blueprint(UpdateBlueprintCommand {
            id,
            name: payload.name,
            width: payload.width,
            height: payload.height,
            grid_size: payload.grid_size,
        })
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Blueprint updated successfully" }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/blueprints/{id}",
    params(("id" = Uuid, Path, description = "Blueprint id")),
    responses(
        (status = 204, description = "Blueprint and contained racks deleted"),
        (status = 404, description = "Blueprint not found")
    ),
    tag = "blueprints"
)]
pub async fn delete_blueprint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .blueprints
        .delete_blueprint(DeleteBlueprintCommand { id })
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_blueprint).get(list_blueprints))
        .route(
            "/:id",
            get(get_blueprint)
                .put(update_blueprint)
                .delete(delete_blueprint),
        )
}
