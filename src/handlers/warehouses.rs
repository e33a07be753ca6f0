use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sea_orm::{ColumnTrait, Condition};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::WarehouseDto,
    entities::warehouse,
    errors::{ErrorResponse, ServiceError},
    AppState,
};

/// Create the warehouses router
pub fn warehouses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_warehouses))
        .route("/CreateWareHouse", post(create_warehouse))
}

/// Lists all active warehouses.
#[utoipa::path(
    get,
    path = "/api/warehouse",
    responses(
        (status = 200, description = "Active warehouses", body = [WarehouseDto]),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn get_all_warehouses(
    State(state): State<AppState>,
) -> Result<Json<Vec<WarehouseDto>>, ServiceError> {
    let warehouses = state.services.warehouse_catalog.list().await?;
    Ok(Json(warehouses))
}

/// Creates a warehouse unless one with the same code already exists.
#[utoipa::path(
    post,
    path = "/api/warehouse/CreateWareHouse",
    request_body = WarehouseDto,
    responses(
        (status = 200, description = "Warehouse created"),
        (status = 400, description = "Invalid warehouse or duplicate code", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "warehouses"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(payload): Json<WarehouseDto>,
) -> Result<Response, ServiceError> {
    payload
        .validate()
        .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

    let exists = Condition::all().add(warehouse::Column::Code.eq(payload.code.clone()));
    state
        .services
        .warehouse_catalog
        .create(payload, Some(exists))
        .await?;

    Ok(Json(json!({ "message": "Created Successfully" })).into_response())
}
