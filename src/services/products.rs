use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
    Set, TransactionTrait,
};
use tracing::{error, info, instrument};

use crate::{
    db::DbPool,
    dto::StockRow,
    entities::{
        product::{self, Entity as Product, Column as ProductColumn},
        product_warehouse::{self, Entity as ProductWarehouse},
        warehouse::{self, Entity as Warehouse},
    },
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Input for creating a product with its initial stock placement.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub code: String,
    pub quantity: i32,
    pub description: String,
    pub warehouse_code: String,
}

/// Service for managing products and querying per-warehouse stock.
#[derive(Clone)]
pub struct ProductService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl ProductService {
    /// Creates a new product service instance
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Creates a product together with its initial warehouse stock row.
    ///
    /// Both inserts happen in one transaction, so a failure cannot leave a
    /// product behind without a stock association.
    #[instrument(skip(self))]
    pub async fn create_product(&self, input: CreateProductInput) -> Result<i32, ServiceError> {
        if input.code.is_empty() {
            return Err(ServiceError::ValidationError(
                "Product code is required.".to_string(),
            ));
        }
        if input.quantity <= 0 {
            return Err(ServiceError::ValidationError(
                "Product quantity must be greater than 0.".to_string(),
            ));
        }

        let db = &*self.db_pool;
        let code = input.code.clone();
        let product_id = db
            .transaction::<_, i32, ServiceError>(move |txn| {
                Box::pin(async move {
                    let existing = Product::find()
                        .filter(ProductColumn::Code.eq(&input.code))
                        .one(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?;
                    if existing.is_some() {
                        return Err(ServiceError::ValidationError(
                            "Product code must be unique.".to_string(),
                        ));
                    }

                    let target_warehouse = Warehouse::find()
                        .filter(warehouse::Column::Code.eq(&input.warehouse_code))
                        .one(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?
                        .ok_or_else(|| {
                            ServiceError::NotFound("Warehouse not found.".to_string())
                        })?;

                    let new_product = product::ActiveModel {
                        code: Set(input.code.clone()),
                        description: Set(input.description.clone()),
                        quantity: Set(input.quantity),
                        is_active: Set(true),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::DatabaseError)?;

                    product_warehouse::ActiveModel {
                        product_id: Set(new_product.id),
                        warehouse_id: Set(target_warehouse.id),
                        quantity: Set(input.quantity),
                        is_active: Set(true),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::DatabaseError)?;

                    Ok(new_product.id)
                })
            })
            .await
            .map_err(ServiceError::from)?;

        self.event_sender
            .send(Event::ProductCreated {
                product_id,
                code: code.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        info!(product_id = %product_id, code = %code, "product created");
        Ok(product_id)
    }

    /// Returns junction rows joined with product and warehouse details,
    /// AND-filtered by the supplied codes. Absent filters impose no
    /// constraint, so empty input returns the whole junction table.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        product_code: Option<String>,
        warehouse_code: Option<String>,
    ) -> Result<Vec<StockRow>, ServiceError> {
        let db = &*self.db_pool;

        let mut query = ProductWarehouse::find()
            .join(JoinType::InnerJoin, product_warehouse::Relation::Product.def())
            .join(
                JoinType::InnerJoin,
                product_warehouse::Relation::Warehouse.def(),
            )
            .select_only()
            .column_as(ProductColumn::Code, "product_code")
            .column_as(warehouse::Column::Code, "warehouse_code")
            .column_as(warehouse::Column::Name, "warehouse_name")
            .column_as(product_warehouse::Column::Quantity, "quantity");

        if let Some(code) = product_code.filter(|c| !c.is_empty()) {
            query = query.filter(ProductColumn::Code.eq(code));
        }
        if let Some(code) = warehouse_code.filter(|c| !c.is_empty()) {
            query = query.filter(warehouse::Column::Code.eq(code));
        }

        query.into_model::<StockRow>().all(db).await.map_err(|e| {
            error!(error = %e, "stock search failed");
            ServiceError::DatabaseError(e)
        })
    }
}
