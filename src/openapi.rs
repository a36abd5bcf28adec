//! OpenAPI document for the warehouse back office.
//!
//! The generated document is served at `/api-docs/openapi.json`; rendering is
//! left to whatever viewer the consumer prefers.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::handlers::{blueprints, racks};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse API",
        version = "1.0.0",
        description = r#"
Back office for warehouse floor planning and stock keeping.

Blueprints model warehouse floors as bounded planes with a snapping grid.
Racks are placed on a blueprint; every placement is snapped to the grid and
validated against the floor bounds and the other racks before it is stored.
Creating a rack also generates its storage locations (rows x grids), which
inventory records then point at.

Placement failures are distinguished by status code: `422` when the rack
would extend beyond the floor, `409` when it would overlap another rack.
        "#,
        license(name = "MIT")
    ),
    paths(
        blueprints::create_blueprint,
        blueprints::get_blueprint,
        blueprints::delete_blueprint,
        racks::create_rack,
        racks::get_rack,
        racks::list_racks_by_blueprint,
        racks::update_rack,
        racks::rotate_rack,
        racks::delete_rack,
    ),
    components(schemas(
        blueprints::CreateBlueprintRequest,
        blueprints::UpdateBlueprintRequest,
        racks::CreateRackRequest,
        racks::UpdateRackRequest,
        ErrorResponse,
    )),
    tags(
        (name = "blueprints", description = "Warehouse floor plans"),
        (name = "racks", description = "Rack placement and storage location generation")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_rack_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/racks"));
        assert!(doc.paths.paths.contains_key("/api/v1/racks/{id}/rotate"));
        assert!(doc.paths.paths.contains_key("/api/v1/blueprints/{id}"));
    }
}
