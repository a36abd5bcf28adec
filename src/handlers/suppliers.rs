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
use crate::services::suppliers::{NewSupplier, SupplierFilter};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SupplierRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub contact_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
}

impl From<SupplierRequest> for NewSupplier {
    fn from(req: SupplierRequest) -> Self {
        NewSupplier {
            name: req.name,
            contact_name: req.contact_name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            country: req.country,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SupplierQuery {
    pub country: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<SupplierRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    let id = state
        .services
        .suppliers
        .create_supplier(payload.into())
        .await
        .map_err(map_service_error)?;

    created_response(json!({ "id": id, "message": "Supplier created successfully" }))
}

async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = state
        .services
        .suppliers
        .get_supplier(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier {} not found", id)))?;

    success_response(found)
}

async fn list_suppliers(
    State(state): State<AppState>,
    Query(query): Query<SupplierQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let filter = SupplierFilter {
        country: query.country,
        name_contains: query.name,
        email_contains: query.email,
    };

    let (items, total) = state
        .services
        .suppliers
        .filter_suppliers(filter, pagination.limit(), pagination.offset())
        .await
        .map_err(map_service_error)?;

    success_response(PaginatedResponse::new(
        items,
        pagination.page,
        pagination.limit(),
        total,
    ))
}

async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SupplierRequest>,
) -> Result<Response, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .suppliers
        .update_supplier(id, payload.into())
        .await
        .map_err(map_service_error)?;

    success_response(json!({ "message": "Supplier updated successfully" }))
}

async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .services
        .suppliers
        .delete_supplier(id)
        .await
        .map_err(map_service_error)?;

    no_content_response()
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_supplier).get(list_suppliers))
        .route(
            "/:id",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        )
}
