use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;
use tracing::error;

use crate::AppState;

/// Liveness probe. Always succeeds while the process is up.
async fn live() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "alive" })))
}

/// Readiness probe. Fails when the database is unreachable.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let ping = state
        .db
        .execute(Statement::from_string(
            state.db.get_database_backend(),
            "SELECT 1".to_owned(),
        ))
        .await;

    match ping {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            error!(error = %e, "readiness database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    ready(State(state)).await
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/live", get(live))
        .route("/health/ready", get(ready))
}
