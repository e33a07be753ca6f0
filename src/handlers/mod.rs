pub mod orders;
pub mod products;
pub mod warehouses;

use std::sync::Arc;

use crate::db::DbPool;
use crate::dto::{ProductDto, WarehouseDto};
use crate::events::EventSender;
use crate::services::catalog::CatalogService;
use crate::services::orders::OrderService;
use crate::services::products::ProductService;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub warehouse_catalog: CatalogService<WarehouseDto>,
    pub product_catalog: CatalogService<ProductDto>,
    pub products: Arc<ProductService>,
    pub orders: Arc<OrderService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            warehouse_catalog: CatalogService::new(db_pool.clone()),
            product_catalog: CatalogService::new(db_pool.clone()),
            products: Arc::new(ProductService::new(db_pool.clone(), event_sender.clone())),
            orders: Arc::new(OrderService::new(db_pool, event_sender)),
        }
    }
}
