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
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse, PaginationParams,
};
use crate::services::products::{NewProduct, ProductFilter};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    pub price: Decimal,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        NewProduct {
            name: req.name,
            sku: req.sku,
            price: req.price,
            description: req.description,
            category_id: req.category_id,
            supplier_id: req.supplier_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub name: Option<String>,
    pub sku: Option<String>,
}

async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let id = state
        .services
        .products
        .create_product(payload.into())
        .await
        .map_err(map_service_error)?;

    created_response(json!({ "id": id, "message": "Product created successfully" }))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .products
        .get_product(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))?;

    success_response(found)
}

async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let filter = ProductFilter {
        category_id: query.category_id,
        supplier_id: query.supplier_id,
        min_price: query.min_price,
        max_price: query.max_price,
        name_contains: query.name,
        sku_contains: query.sku,
    };

    let (items, total) = state
        .services
        .products
        .filter_products(filter, pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .products
        .update_product(id, payload.into())
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Product updated successfully" }))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .products
        .delete_product(id)
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
