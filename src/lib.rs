//! Warehouse API Library
//!
//! Back office for warehouse floor planning and stock keeping. Blueprints
//! describe warehouse floors; racks are placed on them with grid snapping
//! and collision checks, and each rack carries a generated set of storage
//! locations that inventory records reference.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod cache;
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod openapi;
pub mod services;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use handlers::AppServices;

/// Shared application state threaded through every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: AppServices,
    pub cache: Arc<cache::InMemoryCache>,
}

/// Versioned API surface, nested under `/api/v1` by the caller.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/blueprints", handlers::blueprints::routes())
        .nest("/racks", handlers::racks::routes())
        .nest("/locations", handlers::locations::routes())
        .nest("/products", handlers::products::routes())
        .nest("/categories", handlers::categories::routes())
        .nest("/suppliers", handlers::suppliers::routes())
        .nest("/inventories", handlers::inventories::routes())
        .nest("/orders", handlers::orders::routes())
        .nest("/order-lines", handlers::order_lines::routes())
}

/// Full application router: versioned API, health probes, and the OpenAPI
/// document.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(handlers::health::routes())
        .merge(openapi::routes())
}
