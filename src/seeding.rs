use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use crate::db::DbPool;
use crate::entities::{product, product_warehouse, warehouse};
use crate::errors::ServiceError;

/// Initial placement of the demo products across the demo warehouses.
const PLACEMENTS: [(&str, &str); 9] = [
    ("P001", "WH001"),
    ("P002", "WH001"),
    ("P003", "WH002"),
    ("P004", "WH002"),
    ("P005", "WH003"),
    ("P006", "WH003"),
    ("P007", "WH001"),
    ("P008", "WH002"),
    ("P009", "WH003"),
];

const SEED_QUANTITY: i32 = 20;

/// Seeds demo warehouses, products, and stock rows. Runs only against an
/// empty database; an already-seeded store is left untouched.
pub async fn seed_demo_data(db: &DbPool) -> Result<(), ServiceError> {
    let existing = warehouse::Entity::find().count(db).await?;
    if existing > 0 {
        info!("Skipping demo seed; warehouses already present");
        return Ok(());
    }

    let mut warehouse_ids: HashMap<String, i32> = HashMap::new();
    for i in 1..=3 {
        let code = format!("WH{:03}", i);
        let row = warehouse::ActiveModel {
            code: Set(code.clone()),
            name: Set(format!("Warehouse {}", i)),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await?;
        warehouse_ids.insert(code, row.id);
    }

    let mut product_ids: HashMap<String, i32> = HashMap::new();
    for i in 1..=9 {
        let code = format!("P{:03}", i);
        let row = product::ActiveModel {
            code: Set(code.clone()),
            description: Set(format!("Product {}", i)),
            quantity: Set(SEED_QUANTITY),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await?;
        product_ids.insert(code, row.id);
    }

    for (product_code, warehouse_code) in PLACEMENTS {
        product_warehouse::ActiveModel {
            product_id: Set(product_ids[product_code]),
            warehouse_id: Set(warehouse_ids[warehouse_code]),
            quantity: Set(SEED_QUANTITY),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!(
        warehouses = warehouse_ids.len(),
        products = product_ids.len(),
        "Demo data seeded"
    );
    Ok(())
}
