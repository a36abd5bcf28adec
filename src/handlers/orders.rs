use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::entities::ArrivalStatus;
use crate::errors::ApiError;
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse, PaginationParams,
};
use crate::services::orders::{OrderChange, OrderFilter};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OrderRequest {
    pub supplier_id: Uuid,
    pub order_date: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub arrival_status: ArrivalStatus,
}

impl From<OrderRequest> for OrderChange {
    fn from(req: OrderRequest) -> Self {
        OrderChange {
            supplier_id: req.supplier_id,
            order_date: req.order_date,
            arrival_time: req.arrival_time,
            arrival_status: req.arrival_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub supplier_id: Option<Uuid>,
    pub arrival_status: Option<ArrivalStatus>,
    pub ordered_after: Option<DateTime<Utc>>,
    pub ordered_before: Option<DateTime<Utc>>,
}

async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let id = state
        .services
        .orders
        .create_order(payload.into())
        .await
        .map_err(map_service_error)?;

    created_response(json!({ "id": id, "message": "Order created successfully" }))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .orders
        .get_order(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", id)))?;

    success_response(found)
}

async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let filter = OrderFilter {
        supplier_id: query.supplier_id,
        arrival_status: query.arrival_status,
        ordered_after: query.ordered_after,
        ordered_before: query.ordered_before,
    };

    let (items, total) = state
        .services
        .orders
        .filter_orders(filter, pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OrderRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .orders
        .update_order(id, payload.into())
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Order updated successfully" }))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .orders
        .delete_order(id)
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}
