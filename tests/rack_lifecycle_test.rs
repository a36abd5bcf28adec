mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

async fn create_rack(app: &TestApp, blueprint_id: uuid::Uuid, rows: i32, grids: i32) -> String {
    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(json!({
                "blueprint_id": blueprint_id,
                "name": "Rack A",
                "position_x": "0",
                "position_y": "0",
                "width": "5",
                "height": "2",
                "rows": rows,
                "grids": grids,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().expect("rack id").to_string()
}

#[tokio::test]
async fn creating_a_rack_generates_its_location_grid() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let rack_id = create_rack(&app, blueprint_id, 2, 3).await;

    let (status, locations) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/rack/{rack_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let items = locations.as_array().expect("location list");
    assert_eq!(items.len(), 6);

    // 1-based indices, zone derived from rack name, default capacity.
    let first = &items[0];
    assert_eq!(first["row"], 1);
    assert_eq!(first["grid"], 1);
    assert_eq!(first["zone"], "Rack A-Zone");
    assert_eq!(first["capacity"], 100);
    assert_eq!(first["z_coordinates"], "0.0");

    // Second row sits half a meter higher.
    let second_row = items
        .iter()
        .find(|l| l["row"] == 2)
        .expect("second row location");
    assert_eq!(second_row["z_coordinates"], "0.5");
}

#[tokio::test]
async fn resizing_the_grid_regenerates_locations() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let rack_id = create_rack(&app, blueprint_id, 2, 3).await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/racks/{rack_id}"),
            Some(json!({
                "name": "Rack A",
                "position_x": "0",
                "position_y": "0",
                "width": "5",
                "height": "2",
                "rows": 4,
                "grids": 2,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["locations_regenerated"], true);

    let (_, locations) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/rack/{rack_id}"),
            None,
        )
        .await;
    assert_eq!(locations.as_array().expect("location list").len(), 8);
}

#[tokio::test]
async fn renaming_without_grid_change_keeps_locations() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let rack_id = create_rack(&app, blueprint_id, 2, 3).await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/racks/{rack_id}"),
            Some(json!({
                "name": "Rack A Renamed",
                "position_x": "0",
                "position_y": "0",
                "width": "5",
                "height": "2",
                "rows": 2,
                "grids": 3,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["locations_regenerated"], false);

    // Locations survive with their original zone name.
    let (_, locations) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/rack/{rack_id}"),
            None,
        )
        .await;
    let items = locations.as_array().expect("location list");
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["zone"], "Rack A-Zone");
}

#[tokio::test]
async fn deleting_a_rack_removes_its_locations() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let rack_id = create_rack(&app, blueprint_id, 2, 3).await;

    let response = app
        .request(Method::DELETE, &format!("/api/v1/racks/{rack_id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = app
        .request_json(Method::GET, &format!("/api/v1/racks/{rack_id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, locations) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/rack/{rack_id}"),
            None,
        )
        .await;
    assert_eq!(locations.as_array().expect("location list").len(), 0);
}

#[tokio::test]
async fn deleting_a_blueprint_cascades_to_racks() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let rack_id = create_rack(&app, blueprint_id, 2, 3).await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/blueprints/{blueprint_id}"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = app
        .request_json(Method::GET, &format!("/api/v1/racks/{rack_id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/blueprints/{blueprint_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn location_descriptive_fields_are_editable() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let rack_id = create_rack(&app, blueprint_id, 1, 1).await;

    let (_, locations) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/rack/{rack_id}"),
            None,
        )
        .await;
    let location_id = locations[0]["id"].as_str().expect("location id").to_string();

    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/locations/{location_id}"),
            Some(json!({
                "zone": "Cold Storage",
                "capacity": 40,
                "description": "Chilled goods only",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, location) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/{location_id}"),
            None,
        )
        .await;
    assert_eq!(location["zone"], "Cold Storage");
    assert_eq!(location["capacity"], 40);
}
