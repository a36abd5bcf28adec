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

use crate::errors::ApiError;
use crate::handlers::common::{
    created_response, map_service_error, success_response, validate_input, PaginatedResponse,
    PaginationParams,
};
use crate::services::order_lines::OrderLineFilter;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddOrderLineRequest {
    pub order_id: Uuid,
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineQuery {
    pub order_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub min_quantity: Option<i32>,
    pub max_quantity: Option<i32>,
}

async fn add_order_line(
    State(state): State<AppState>,
    Json(payload): Json<AddOrderLineRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let id = state
        .services
        .order_lines
        .add_order_line(
            payload.order_id,
            payload.product_id,
            payload.quantity,
            payload.unit_price,
        )
        .await
        .map_err(map_service_error)?;

    created_response(json!({ "id": id, "message": "Order line added successfully" }))
}

async fn get_order_line(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .order_lines
        .get_order_line(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Order line {} not found", id)))?;

    success_response(found)
}

async fn list_order_lines(
    State(state): State<AppState>,
    Query(query): Query<OrderLineQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let filter = OrderLineFilter {
        order_id: query.order_id,
        product_id: query.product_id,
        min_quantity: query.min_quantity,
        max_quantity: query.max_quantity,
    };

    let (items, total) = state
        .services
        .order_lines
        .filter_order_lines(filter, pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_order_line).get(list_order_lines))
        .route("/:id", get(get_order_line))
}
