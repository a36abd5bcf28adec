mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

async fn create_entity(app: &TestApp, uri: &str, body: serde_json::Value) -> String {
    let (status, body) = app.request_json(Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create at {uri} failed: {body}");
    body["id"].as_str().expect("id in response").to_string()
}

#[tokio::test]
async fn product_crud_round_trip() {
    let app = TestApp::new().await;

    let category_id = create_entity(
        &app,
        "/api/v1/categories",
        json!({ "name": "Beverages", "description": "Drinks" }),
    )
    .await;

    let product_id = create_entity(
        &app,
        "/api/v1/products",
        json!({
            "name": "Sparkling Water",
            "sku": "BEV-0001",
            "price": "1.25",
            "category_id": category_id,
        }),
    )
    .await;

    let (status, product) = app
        .request_json(Method::GET, &format!("/api/v1/products/{product_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["sku"], "BEV-0001");
    assert_eq!(product["price"], "1.25");

    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/products/{product_id}"),
            Some(json!({
                "name": "Sparkling Water 500ml",
                "sku": "BEV-0001",
                "price": "1.40",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/products/{product_id}"),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = app
        .request_json(Method::GET, &format!("/api/v1/products/{product_id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_sku_is_rejected() {
    let app = TestApp::new().await;

    create_entity(
        &app,
        "/api/v1/products",
        json!({ "name": "Widget", "sku": "W-1", "price": "3.00" }),
    )
    .await;

    let (status, _body) = app
        .request_json(
            Method::POST,
            "/api/v1/products",
            Some(json!({ "name": "Widget Clone", "sku": "W-1", "price": "3.50" })),
        )
        .await;
    assert_ne!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn product_filtering_by_category() {
    let app = TestApp::new().await;

    let beverages = create_entity(&app, "/api/v1/categories", json!({ "name": "Beverages" })).await;
    let snacks = create_entity(&app, "/api/v1/categories", json!({ "name": "Snacks" })).await;

    create_entity(
        &app,
        "/api/v1/products",
        json!({ "name": "Cola", "sku": "BEV-1", "price": "2.00", "category_id": beverages }),
    )
    .await;
    create_entity(
        &app,
        "/api/v1/products",
        json!({ "name": "Chips", "sku": "SNK-1", "price": "1.50", "category_id": snacks }),
    )
    .await;

    let (status, body) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/products?category_id={beverages}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["sku"], "BEV-1");
}

#[tokio::test]
async fn order_with_lines_against_a_supplier() {
    let app = TestApp::new().await;

    let supplier_id = create_entity(
        &app,
        "/api/v1/suppliers",
        json!({ "name": "Acme Logistics", "country": "NL" }),
    )
    .await;
    let product_id = create_entity(
        &app,
        "/api/v1/products",
        json!({ "name": "Pallet", "sku": "PAL-1", "price": "25.00", "supplier_id": supplier_id }),
    )
    .await;

    let order_id = create_entity(
        &app,
        "/api/v1/orders",
        json!({
            "supplier_id": supplier_id,
            "arrival_status": "pending",
        }),
    )
    .await;

    let line_id = create_entity(
        &app,
        "/api/v1/order-lines",
        json!({
            "order_id": order_id,
            "product_id": product_id,
            "quantity": 12,
            "unit_price": "24.50",
        }),
    )
    .await;

    let (status, line) = app
        .request_json(Method::GET, &format!("/api/v1/order-lines/{line_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["quantity"], 12);

    // Mark the order arrived.
    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/orders/{order_id}"),
            Some(json!({
                "supplier_id": supplier_id,
                "arrival_status": "arrived",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, order) = app
        .request_json(Method::GET, &format!("/api/v1/orders/{order_id}"), None)
        .await;
    assert_eq!(order["arrival_status"], "arrived");

    // Filter orders by status.
    let (status, body) = app
        .request_json(Method::GET, "/api/v1/orders?arrival_status=arrived", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn order_line_for_missing_order_is_not_found() {
    let app = TestApp::new().await;

    let product_id = create_entity(
        &app,
        "/api/v1/products",
        json!({ "name": "Pallet", "sku": "PAL-2", "price": "25.00" }),
    )
    .await;

    let (status, _body) = app
        .request_json(
            Method::POST,
            "/api/v1/order-lines",
            Some(json!({
                "order_id": uuid::Uuid::new_v4(),
                "product_id": product_id,
                "quantity": 1,
                "unit_price": "1.00",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inventory_tracks_stock_at_a_location() {
    let app = TestApp::new().await;

    let blueprint_id = app.create_blueprint("Floor", "20", "20", 50).await;
    let (_, rack) = app
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
                "rows": 1,
                "grids": 1,
            })),
        )
        .await;
    let rack_id = rack["id"].as_str().expect("rack id");

    let (_, locations) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/rack/{rack_id}"),
            None,
        )
        .await;
    let location_id = locations[0]["id"].as_str().expect("location id").to_string();

    let product_id = create_entity(
        &app,
        "/api/v1/products",
        json!({ "name": "Crate", "sku": "CRT-1", "price": "9.99" }),
    )
    .await;

    let inventory_id = create_entity(
        &app,
        "/api/v1/inventories",
        json!({
            "product_id": product_id,
            "location_id": location_id,
            "current_stock": 30,
            "reorder_level": 5,
            "units_on_order": 0,
        }),
    )
    .await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/inventories/{inventory_id}"),
            Some(json!({
                "current_stock": 18,
                "reorder_level": 5,
                "units_on_order": 20,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = app
        .request_json(
            Method::GET,
            &format!("/api/v1/inventories/product/{product_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("inventory list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["current_stock"], 18);

    // Negative quantities are refused.
    let (status, _body) = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/inventories/{inventory_id}"),
            Some(json!({
                "current_stock": -1,
                "reorder_level": 5,
                "units_on_order": 0,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
