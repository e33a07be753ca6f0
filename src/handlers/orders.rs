use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::OrderSummary,
    errors::{ErrorResponse, ServiceError},
    services::orders::CreateOrderInput,
    AppState,
};

/// Create the orders router
pub fn orders_router() -> Router<AppState> {
    Router::new()
        .route("/CreateOrderAndTransfer", post(create_order_and_transfer))
        .route("/GetAllOrders", get(get_all_orders))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: i32,

    #[serde(alias = "sourceWarehouseId")]
    pub source_ware_house_id: i32,

    #[serde(alias = "destinationWarehouseId")]
    pub destination_ware_house_id: i32,

    #[validate(range(min = 1, message = "Product quantity must be a positive value."))]
    pub product_quantity: i32,
}

/// Transfers stock of a product between two warehouses and records the
/// transfer as an order.
#[utoipa::path(
    post,
    path = "/api/orders/CreateOrderAndTransfer",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Transfer committed; message summarizes the new quantities"),
        (status = 400, description = "Invalid transfer request or insufficient stock", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "orders"
)]
pub async fn create_order_and_transfer(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Response, ServiceError> {
    payload
        .validate()
        .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

    let receipt = state
        .services
        .orders
        .transfer_stock(CreateOrderInput {
            product_id: payload.product_id,
            source_warehouse_id: payload.source_ware_house_id,
            destination_warehouse_id: payload.destination_ware_house_id,
            quantity: payload.product_quantity,
        })
        .await?;

    Ok(Json(json!({ "message": receipt.summary() })).into_response())
}

/// Lists all recorded orders.
#[utoipa::path(
    get,
    path = "/api/orders/GetAllOrders",
    responses(
        (status = 200, description = "Order summaries", body = [OrderSummary]),
        (status = 404, description = "No orders recorded yet"),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "orders"
)]
pub async fn get_all_orders(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let orders = state.services.orders.list_orders().await?;
    if orders.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No orders found." })),
        )
            .into_response());
    }
    Ok(Json(orders).into_response())
}
