mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::TestApp;

fn rack_body(blueprint_id: Uuid, name: &str, x: &str, y: &str, w: &str, h: &str) -> serde_json::Value {
    json!({
        "blueprint_id": blueprint_id,
        "name": name,
        "position_x": x,
        "position_y": y,
        "width": w,
        "height": h,
        "rows": 3,
        "grids": 4,
    })
}

#[tokio::test]
async fn rack_placement_within_bounds_succeeds() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack A", "0", "0", "5", "2")),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    // 3 rows x 4 grids
    assert_eq!(body["location_count"], 12);
}

#[tokio::test]
async fn touching_edges_do_not_collide() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack A", "0", "0", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    // Shares the x=5 edge with Rack A; touching is not overlapping.
    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack B", "5", "0", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn overlapping_rack_is_rejected_with_conflict() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack A", "0", "0", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (status, _body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack C", "4", "1", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn rack_beyond_bounds_is_rejected_as_unprocessable() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    // x + w = 21 > 20
    let (status, _body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack D", "16", "0", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn exact_fit_against_far_edge_is_allowed() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    // x + w = 20 exactly
    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack E", "15", "18", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn position_is_snapped_to_grid() {
    let app = TestApp::new().await;
    // 50 cm grid -> 0.5 m snapping unit
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack F", "1.3", "0.74", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let rack_id = body["id"].as_str().expect("rack id");
    let (status, rack) = app
        .request_json(Method::GET, &format!("/api/v1/racks/{rack_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    // 1.3 -> 1.5 (banker's rounding of 2.6 -> 3 half-steps), 0.74 -> 0.5
    assert_eq!(rack["position_x"], "1.5");
    assert_eq!(rack["position_y"], "0.5");
}

#[tokio::test]
async fn rack_on_missing_blueprint_is_not_found() {
    let app = TestApp::new().await;

    let (status, _body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(Uuid::new_v4(), "Orphan", "0", "0", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rotation_swaps_footprint_and_validates_it() {
    let app = TestApp::new().await;
    // Narrow floor: 10 wide, 3 deep.
    let blueprint_id = app.create_blueprint("Narrow Floor", "10", "3", 50).await;

    // 1x3 rack fits; rotated to 3x1 it still fits.
    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rotatable", "0", "0", "1", "3")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let rack_id = body["id"].as_str().expect("rack id").to_string();

    let (status, body) = app
        .request_json(
            Method::POST,
            &format!("/api/v1/racks/{rack_id}/rotate"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["rotation_degrees"], 90);

    // At 90 degrees the footprint is 3 wide by 1 deep. Stored dimensions are
    // unchanged.
    let (_, rack) = app
        .request_json(Method::GET, &format!("/api/v1/racks/{rack_id}"), None)
        .await;
    assert_eq!(rack["width"], "1");
    assert_eq!(rack["height"], "3");
    assert_eq!(rack["rotation_degrees"], 90);

    // Second rotation (180 degrees) restores the original footprint.
    let (status, body) = app
        .request_json(
            Method::POST,
            &format!("/api/v1/racks/{rack_id}/rotate"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["rotation_degrees"], 180);
}

#[tokio::test]
async fn rotation_that_no_longer_fits_is_rejected() {
    let app = TestApp::new().await;
    // 10 wide but only 2 deep: a 1x10 rack fits, its 10x1 rotation at y=0
    // fits too, so anchor the rack where the rotated footprint overflows.
    let blueprint_id = app.create_blueprint("Sliver", "2", "10", 50).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Tall", "0", "0", "1", "10")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let rack_id = body["id"].as_str().expect("rack id").to_string();

    // Rotated footprint would be 10 wide on a 2-wide floor.
    let (status, _body) = app
        .request_json(
            Method::POST,
            &format!("/api/v1/racks/{rack_id}/rotate"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Rotation is unchanged after the failed attempt.
    let (_, rack) = app
        .request_json(Method::GET, &format!("/api/v1/racks/{rack_id}"), None)
        .await;
    assert_eq!(rack["rotation_degrees"], 0);
}

#[tokio::test]
async fn update_excludes_own_footprint_from_collision() {
    let app = TestApp::new().await;
    let blueprint_id = app.create_blueprint("Main Floor", "20", "20", 50).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/api/v1/racks",
            Some(rack_body(blueprint_id, "Rack A", "0", "0", "5", "2")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let rack_id = body["id"].as_str().expect("rack id").to_string();

    // Nudge the rack one grid step; overlaps its old footprint only.
    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/racks/{rack_id}"),
            Some(json!({
                "name": "Rack A",
                "position_x": "0.5",
                "position_y": "0",
                "width": "5",
                "height": "2",
                "rows": 3,
                "grids": 4,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
}
