mod common;

use common::TestApp;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::json;
use warehouse_api::entities::warehouse;

#[tokio::test]
async fn listing_returns_seeded_warehouses() {
    let app = TestApp::new(true).await;

    let (status, body) = app.get("/api/warehouse").await;
    assert_eq!(status, 200);
    let warehouses = body.as_array().expect("warehouses");
    assert_eq!(warehouses.len(), 3);
    assert_eq!(warehouses[0]["wareHouseCode"], "WH001");
    assert_eq!(warehouses[0]["wareHouseName"], "Warehouse 1");
}

#[tokio::test]
async fn create_warehouse_then_list_includes_it() {
    let app = TestApp::new(true).await;

    let (status, body) = app
        .post_json(
            "/api/warehouse/CreateWareHouse",
            json!({
                "wareHouseCode": "WH004",
                "wareHouseName": "Warehouse 4"
            }),
        )
        .await;

    assert_eq!(status, 200, "unexpected response: {body}");
    assert_eq!(body["message"], "Created Successfully");

    let (status, body) = app.get("/api/warehouse").await;
    assert_eq!(status, 200);
    let codes: Vec<&str> = body
        .as_array()
        .expect("warehouses")
        .iter()
        .map(|w| w["wareHouseCode"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"WH004"));
}

#[tokio::test]
async fn create_warehouse_rejects_duplicate_code() {
    let app = TestApp::new(true).await;

    let (status, body) = app
        .post_json(
            "/api/warehouse/CreateWareHouse",
            json!({
                "wareHouseCode": "WH001",
                "wareHouseName": "Shadow warehouse"
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Entity already exists");

    let (status, body) = app.get("/api/warehouse").await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().expect("warehouses").len(), 3);
}

#[tokio::test]
async fn create_warehouse_validates_code_length() {
    let app = TestApp::new(true).await;

    let (status, body) = app
        .post_json(
            "/api/warehouse/CreateWareHouse",
            json!({
                "wareHouseCode": "X".repeat(51),
                "wareHouseName": "Oversized code"
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert!(body["message"]
        .as_str()
        .expect("message")
        .contains("Warehouse code must be between 1 and 50 characters."));
}

#[tokio::test]
async fn listing_excludes_soft_deleted_warehouses() {
    let app = TestApp::new(true).await;
    let warehouse_id = app.warehouse_id("WH003").await;

    let mut deactivated: warehouse::ActiveModel = warehouse::Entity::find_by_id(warehouse_id)
        .one(&*app.state.db)
        .await
        .expect("find warehouse")
        .expect("warehouse present")
        .into();
    deactivated.is_active = Set(false);
    deactivated
        .update(&*app.state.db)
        .await
        .expect("deactivate");

    let (status, body) = app.get("/api/warehouse").await;
    assert_eq!(status, 200);
    let codes: Vec<&str> = body
        .as_array()
        .expect("warehouses")
        .iter()
        .map(|w| w["wareHouseCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["WH001", "WH002"]);
}

#[tokio::test]
async fn duplicate_check_sees_soft_deleted_rows() {
    let app = TestApp::new(true).await;
    let warehouse_id = app.warehouse_id("WH003").await;

    let mut deactivated: warehouse::ActiveModel = warehouse::Entity::find_by_id(warehouse_id)
        .one(&*app.state.db)
        .await
        .expect("find warehouse")
        .expect("warehouse present")
        .into();
    deactivated.is_active = Set(false);
    deactivated
        .update(&*app.state.db)
        .await
        .expect("deactivate");

    // The existence predicate matches regardless of the active flag.
    let (status, body) = app
        .post_json(
            "/api/warehouse/CreateWareHouse",
            json!({
                "wareHouseCode": "WH003",
                "wareHouseName": "Revived warehouse"
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Entity already exists");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new(false).await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}
