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
use crate::services::inventories::InventoryLevels;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryRequest {
    pub product_id: Uuid,
    pub location_id: Uuid,
    #[validate(range(min = 0))]
    pub current_stock: i32,
    #[validate(range(min = 0))]
    pub reorder_level: i32,
    #[validate(range(min = 0))]
    pub units_on_order: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryRequest {
    #[validate(range(min = 0))]
    pub current_stock: i32,
    #[validate(range(min = 0))]
    pub reorder_level: i32,
    #[validate(range(min = 0))]
    pub units_on_order: i32,
}

async fn create_inventory(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let id = state
        .services
        .inventories
        .create_inventory(
            payload.product_id,
            payload.location_id,
            InventoryLevels {
                current_stock: payload.current_stock,
                reorder_level: payload.reorder_level,
                units_on_order: payload.units_on_order,
            },
        )
        .await
        .map_err(map_service_error)?;

    created_response(json!({ "id": id, "message": "Inventory record created successfully" }))
}

async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .inventories
        .get_inventory(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Inventory record {} not found", id)))?;

    success_response(found)
}

async fn list_inventories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let (items, total) = state
        .services
        .inventories
        .list_inventories(pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

async fn list_inventories_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let items = state
        .services
        .inventories
        .list_by_product(product_id)
        .await
        .map_err(map_service_error)?;

    success_response(items)
}

async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInventoryRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .inventories
        .update_inventory(
            id,
            InventoryLevels {
                current_stock: payload.current_stock,
                reorder_level: payload.reorder_level,
                units_on_order: payload.units_on_order,
            },
        )
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Inventory record updated successfully" }))
}

async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .inventories
        .delete_inventory(id)
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_inventory).get(list_inventories))
        .route(
            "/:id",
            get(get_inventory)
                .put(update_inventory)
                .delete(delete_inventory),
        )
        .route("/product/:product_id", get(list_inventories_by_product))
}
