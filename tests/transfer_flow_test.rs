mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn transfer_moves_stock_and_records_order() {
    let app = TestApp::new(true).await;
    let product = app.product_id("P001").await;
    let source = app.warehouse_id("WH001").await;
    let destination = app.warehouse_id("WH002").await;

    let (status, body) = app
        .post_json(
            "/api/orders/CreateOrderAndTransfer",
            json!({
                "productId": product,
                "sourceWareHouseId": source,
                "destinationWareHouseId": destination,
                "productQuantity": 5
            }),
        )
        .await;

    assert_eq!(status, 200, "unexpected response: {body}");
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("Product transferred successfully"));
    assert!(message.contains("now has 15 units"));
    assert!(message.contains("now has 5 units"));

    // Seeded WH001 had 20 units of P001; WH002 had no row at all.
    assert_eq!(app.stock(product, source).await, Some(15));
    assert_eq!(app.stock(product, destination).await, Some(5));
    assert_eq!(app.order_count().await, 1);
}

#[tokio::test]
async fn transfer_rejects_same_source_and_destination() {
    let app = TestApp::new(true).await;
    let product = app.product_id("P001").await;
    let warehouse = app.warehouse_id("WH001").await;

    let (status, body) = app
        .post_json(
            "/api/orders/CreateOrderAndTransfer",
            json!({
                "productId": product,
                "sourceWareHouseId": warehouse,
                "destinationWareHouseId": warehouse,
                "productQuantity": 5
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        "Source and destination warehouses cannot be the same."
    );
    assert_eq!(app.stock(product, warehouse).await, Some(20));
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn transfer_rejects_insufficient_stock_without_side_effects() {
    let app = TestApp::new(true).await;
    let product = app.product_id("P001").await;
    let source = app.warehouse_id("WH001").await;
    let destination = app.warehouse_id("WH002").await;

    let (status, body) = app
        .post_json(
            "/api/orders/CreateOrderAndTransfer",
            json!({
                "productId": product,
                "sourceWareHouseId": source,
                "destinationWareHouseId": destination,
                "productQuantity": 50
            }),
        )
        .await;

    assert_eq!(status, 400);
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("Insufficient stock"), "got: {message}");

    assert_eq!(app.stock(product, source).await, Some(20));
    assert_eq!(app.stock(product, destination).await, None);
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn transfer_rejects_unknown_stock_association() {
    let app = TestApp::new(true).await;
    // P003 is seeded in WH002 only, so WH001 has no junction row for it.
    let product = app.product_id("P003").await;
    let source = app.warehouse_id("WH001").await;
    let destination = app.warehouse_id("WH003").await;

    let (status, body) = app
        .post_json(
            "/api/orders/CreateOrderAndTransfer",
            json!({
                "productId": product,
                "sourceWareHouseId": source,
                "destinationWareHouseId": destination,
                "productQuantity": 1
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert!(body["message"]
        .as_str()
        .expect("message")
        .contains("Insufficient stock"));
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn transfer_rejects_non_positive_quantity() {
    let app = TestApp::new(true).await;
    let product = app.product_id("P001").await;
    let source = app.warehouse_id("WH001").await;
    let destination = app.warehouse_id("WH002").await;

    let (status, _body) = app
        .post_json(
            "/api/orders/CreateOrderAndTransfer",
            json!({
                "productId": product,
                "sourceWareHouseId": source,
                "destinationWareHouseId": destination,
                "productQuantity": 0
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(app.stock(product, source).await, Some(20));
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn repeated_transfers_accumulate() {
    let app = TestApp::new(true).await;
    let product = app.product_id("P001").await;
    let source = app.warehouse_id("WH001").await;
    let destination = app.warehouse_id("WH002").await;

    let request = json!({
        "productId": product,
        "sourceWareHouseId": source,
        "destinationWareHouseId": destination,
        "productQuantity": 5
    });

    let (status, _) = app
        .post_json("/api/orders/CreateOrderAndTransfer", request.clone())
        .await;
    assert_eq!(status, 200);
    let (status, _) = app
        .post_json("/api/orders/CreateOrderAndTransfer", request)
        .await;
    assert_eq!(status, 200);

    // No dedup key: two independent orders and cumulative quantity changes.
    assert_eq!(app.stock(product, source).await, Some(10));
    assert_eq!(app.stock(product, destination).await, Some(10));
    assert_eq!(app.order_count().await, 2);
}

#[tokio::test]
async fn get_all_orders_returns_404_when_empty() {
    let app = TestApp::new(true).await;

    let (status, body) = app.get("/api/orders/GetAllOrders").await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "No orders found.");
}

#[tokio::test]
async fn get_all_orders_resolves_names_and_current_quantities() {
    let app = TestApp::new(true).await;
    let product = app.product_id("P001").await;
    let source = app.warehouse_id("WH001").await;
    let destination = app.warehouse_id("WH002").await;

    let (status, _) = app
        .post_json(
            "/api/orders/CreateOrderAndTransfer",
            json!({
                "productId": product,
                "sourceWareHouseId": source,
                "destinationWareHouseId": destination,
                "productQuantity": 5
            }),
        )
        .await;
    assert_eq!(status, 200);

    let (status, body) = app.get("/api/orders/GetAllOrders").await;
    assert_eq!(status, 200);
    let orders = body.as_array().expect("order list");
    assert_eq!(orders.len(), 1);

    let order = &orders[0];
    assert_eq!(order["sourceWareHouseName"], "Warehouse 1");
    assert_eq!(order["destinationWareHouseName"], "Warehouse 2");
    assert_eq!(order["productName"], "Product 1");
    assert_eq!(order["productQuantityOrdered"], 5);
    assert_eq!(order["newSourceWarehouseQuantity"], 15);
    assert_eq!(order["newDestinationWareHouseQuantity"], 5);
}
