use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::{
    dto::{ProductDto, StockRow},
    errors::{ErrorResponse, ServiceError},
    services::products::CreateProductInput,
    AppState,
};

/// Create the products router
pub fn products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_products))
        .route("/Search", get(search_stock))
        .route("/CreateProduct", post(create_product))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Product code to filter by (optional)
    pub product_code: Option<String>,
    /// Warehouse code to filter by (optional)
    pub warehouse_code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub product_code: String,

    #[serde(default)]
    pub product_quantity: i32,

    #[serde(default, alias = "warehouseCode")]
    pub ware_house_code: String,

    #[serde(default)]
    pub product_description: String,
}

/// Searches stock rows by product code and/or warehouse code. Both filters
/// are optional and combine with AND semantics.
#[utoipa::path(
    get,
    path = "/api/product/Search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching stock rows (possibly empty)", body = [StockRow]),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn search_stock(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<StockRow>>, ServiceError> {
    let rows = state
        .services
        .products
        .search(params.product_code, params.warehouse_code)
        .await?;
    Ok(Json(rows))
}

/// Lists all active products.
#[utoipa::path(
    get,
    path = "/api/product",
    responses(
        (status = 200, description = "Active products", body = [ProductDto]),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductDto>>, ServiceError> {
    let products = state.services.product_catalog.list().await?;
    Ok(Json(products))
}

/// Creates a product and stores its initial stock in the given warehouse.
#[utoipa::path(
    post,
    path = "/api/product/CreateProduct",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created"),
        (status = 400, description = "Invalid or duplicate product", body = ErrorResponse),
        (status = 404, description = "Warehouse not found", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Response, ServiceError> {
    state
        .services
        .products
        .create_product(CreateProductInput {
            code: payload.product_code,
            quantity: payload.product_quantity,
            description: payload.product_description,
            warehouse_code: payload.ware_house_code,
        })
        .await?;

    Ok(Json(json!({
        "message": "Product created and stored in Warehouse successfully."
    }))
    .into_response())
}
