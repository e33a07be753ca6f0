use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use tracing::{error, info, instrument};

use crate::{
    db::DbPool,
    dto::OrderSummary,
    entities::{
        order::{self, Entity as Order},
        product::Entity as Product,
        product_warehouse::{self, Entity as ProductWarehouse},
        warehouse::Entity as Warehouse,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Input for a stock transfer between two warehouses.
#[derive(Debug, Clone, Copy)]
pub struct CreateOrderInput {
    pub product_id: i32,
    pub source_warehouse_id: i32,
    pub destination_warehouse_id: i32,
    pub quantity: i32,
}

/// Outcome of a committed transfer, carrying the resulting quantities so
/// the handler can render a summary for the client.
#[derive(Debug, Clone, Copy)]
pub struct TransferReceipt {
    pub order_id: i32,
    pub product_id: i32,
    pub source_warehouse_id: i32,
    pub destination_warehouse_id: i32,
    pub quantity: i32,
    pub source_quantity: i32,
    pub destination_quantity: i32,
}

impl TransferReceipt {
    pub fn summary(&self) -> String {
        format!(
            "Product transferred successfully. \
             Source Warehouse ({}) now has {} units of product {}. \
             Destination Warehouse ({}) now has {} units of product {}.",
            self.source_warehouse_id,
            self.source_quantity,
            self.product_id,
            self.destination_warehouse_id,
            self.destination_quantity,
            self.product_id,
        )
    }
}

/// Service for transferring stock between warehouses and listing the
/// resulting orders.
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl OrderService {
    /// Creates a new order service instance
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Moves `quantity` units of a product from the source warehouse to the
    /// destination warehouse and records the transfer as an order.
    ///
    /// The read-check-update-insert sequence runs in a single transaction:
    /// on any failure the stock quantities and the order table are left
    /// exactly as before the attempt.
    #[instrument(skip(self))]
    pub async fn transfer_stock(
        &self,
        input: CreateOrderInput,
    ) -> Result<TransferReceipt, ServiceError> {
        if input.quantity <= 0 {
            return Err(ServiceError::ValidationError(
                "Product quantity must be a positive value.".to_string(),
            ));
        }
        if input.source_warehouse_id == input.destination_warehouse_id {
            return Err(ServiceError::ValidationError(
                "Source and destination warehouses cannot be the same.".to_string(),
            ));
        }

        let db = &*self.db_pool;
        let receipt = db
            .transaction::<_, TransferReceipt, ServiceError>(move |txn| {
                Box::pin(async move {
                    let source = ProductWarehouse::find()
                        .filter(product_warehouse::Column::ProductId.eq(input.product_id))
                        .filter(
                            product_warehouse::Column::WarehouseId.eq(input.source_warehouse_id),
                        )
                        .one(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?;

                    let source = match source {
                        Some(row) if row.quantity >= input.quantity => row,
                        _ => {
                            return Err(ServiceError::InsufficientStock(format!(
                                "Insufficient stock for product {} in warehouse {}.",
                                input.product_id, input.source_warehouse_id
                            )))
                        }
                    };

                    let destination = ProductWarehouse::find()
                        .filter(product_warehouse::Column::ProductId.eq(input.product_id))
                        .filter(
                            product_warehouse::Column::WarehouseId
                                .eq(input.destination_warehouse_id),
                        )
                        .one(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?;

                    let destination = match destination {
                        Some(row) => row,
                        None => product_warehouse::ActiveModel {
                            product_id: Set(input.product_id),
                            warehouse_id: Set(input.destination_warehouse_id),
                            quantity: Set(0),
                            is_active: Set(true),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?,
                    };

                    let source_quantity = source.quantity - input.quantity;
                    let destination_quantity = destination.quantity + input.quantity;

                    let mut source_active: product_warehouse::ActiveModel = source.into();
                    source_active.quantity = Set(source_quantity);
                    source_active
                        .update(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?;

                    let mut destination_active: product_warehouse::ActiveModel =
                        destination.into();
                    destination_active.quantity = Set(destination_quantity);
                    destination_active
                        .update(txn)
                        .await
                        .map_err(ServiceError::DatabaseError)?;

                    let new_order = order::ActiveModel {
                        product_id: Set(input.product_id),
                        source_warehouse_id: Set(input.source_warehouse_id),
                        destination_warehouse_id: Set(input.destination_warehouse_id),
                        quantity: Set(input.quantity),
                        order_date: Set(Utc::now()),
                        is_active: Set(true),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::DatabaseError)?;

                    Ok(TransferReceipt {
                        order_id: new_order.id,
                        product_id: input.product_id,
                        source_warehouse_id: input.source_warehouse_id,
                        destination_warehouse_id: input.destination_warehouse_id,
                        quantity: input.quantity,
                        source_quantity,
                        destination_quantity,
                    })
                })
            })
            .await
            .map_err(ServiceError::from)?;

        self.event_sender
            .send(Event::StockTransferred {
                order_id: receipt.order_id,
                product_id: receipt.product_id,
                source_warehouse_id: receipt.source_warehouse_id,
                destination_warehouse_id: receipt.destination_warehouse_id,
                quantity: receipt.quantity,
                occurred_at: Utc::now(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        info!(order_id = receipt.order_id, "stock transfer committed");
        Ok(receipt)
    }

    /// Lists all orders with resolved product and warehouse names plus the
    /// junction rows' current quantities.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, ServiceError> {
        let db = &*self.db_pool;

        let orders = Order::find().all(db).await.map_err(|e| {
            error!(error = %e, "failed to list orders");
            ServiceError::DatabaseError(e)
        })?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let products: HashMap<i32, String> = Product::find()
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .into_iter()
            .map(|p| (p.id, p.description))
            .collect();
        let warehouses: HashMap<i32, String> = Warehouse::find()
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .into_iter()
            .map(|w| (w.id, w.name))
            .collect();
        let stock: HashMap<(i32, i32), i32> = ProductWarehouse::find()
            .all(db)
            .await
            .map_err(ServiceError::DatabaseError)?
            .into_iter()
            .map(|pw| ((pw.product_id, pw.warehouse_id), pw.quantity))
            .collect();

        let summaries = orders
            .into_iter()
            .map(|o| OrderSummary {
                source_warehouse_name: warehouses
                    .get(&o.source_warehouse_id)
                    .cloned()
                    .unwrap_or_default(),
                destination_warehouse_name: warehouses
                    .get(&o.destination_warehouse_id)
                    .cloned()
                    .unwrap_or_default(),
                product_name: products.get(&o.product_id).cloned().unwrap_or_default(),
                quantity_ordered: o.quantity,
                source_warehouse_quantity: stock
                    .get(&(o.product_id, o.source_warehouse_id))
                    .copied()
                    .unwrap_or(0),
                destination_warehouse_quantity: stock
                    .get(&(o.product_id, o.destination_warehouse_id))
                    .copied()
                    .unwrap_or(0),
            })
            .collect();

        Ok(summaries)
    }
}
