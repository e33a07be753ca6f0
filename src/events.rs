use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;

/// Domain events published by the services after successful commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    WarehouseCreated {
        code: String,
    },
    ProductCreated {
        product_id: i32,
        code: String,
    },
    StockTransferred {
        order_id: i32,
        product_id: i32,
        source_warehouse_id: i32,
        destination_warehouse_id: i32,
        quantity: i32,
        occurred_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Consumes and logs domain events. Delivery is fire-and-forget; downstream
/// integrations would subscribe here.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::WarehouseCreated { code } => {
                info!(code = %code, "warehouse created");
            }
            Event::ProductCreated { product_id, code } => {
                info!(product_id = %product_id, code = %code, "product created");
            }
            Event::StockTransferred {
                order_id,
                product_id,
                source_warehouse_id,
                destination_warehouse_id,
                quantity,
                ..
            } => {
                info!(
                    order_id = %order_id,
                    product_id = %product_id,
                    source_warehouse_id = %source_warehouse_id,
                    destination_warehouse_id = %destination_warehouse_id,
                    quantity = %quantity,
                    "stock transferred"
                );
            }
        }
    }
}
