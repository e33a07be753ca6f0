use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{dto, errors, handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse API",
        version = "0.1.0",
        description = "Warehouse management backend: product/warehouse catalog \
                       and transactional stock transfers between warehouses."
    ),
    paths(
        handlers::orders::create_order_and_transfer,
        handlers::orders::get_all_orders,
        handlers::products::search_stock,
        handlers::products::get_all_products,
        handlers::products::create_product,
        handlers::warehouses::get_all_warehouses,
        handlers::warehouses::create_warehouse,
    ),
    components(schemas(
        dto::WarehouseDto,
        dto::ProductDto,
        dto::StockRow,
        dto::OrderSummary,
        handlers::orders::CreateOrderRequest,
        handlers::products::CreateProductRequest,
        errors::ErrorResponse,
    )),
    tags(
        (name = "orders", description = "Stock transfers and order history"),
        (name = "products", description = "Product catalog and stock search"),
        (name = "warehouses", description = "Warehouse catalog")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
