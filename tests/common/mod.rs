#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::mpsc;
use tower::ServiceExt;

use warehouse_api::{
    config::AppConfig,
    db,
    entities::{product, product_warehouse, warehouse},
    events::{self, EventSender},
    handlers::AppServices,
    seeding, AppState,
};

/// Helper harness for spinning up an application backed by a throwaway
/// SQLite database.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _db_file: NamedTempFile,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new(seed: bool) -> Self {
        let db_file = NamedTempFile::new().expect("temp db file");
        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_file.path().display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("db connect");
        db::run_migrations(&pool).await.expect("migrations");

        let db_arc = Arc::new(pool);
        if seed {
            seeding::seed_demo_data(&db_arc).await.expect("seed");
        }

        let (event_tx, event_rx) = mpsc::channel(64);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(db_arc.clone(), event_sender.clone());
        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        };
        let router = warehouse_api::app(state.clone());

        Self {
            router,
            state,
            _db_file: db_file,
            _event_task: event_task,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, json)
    }

    pub async fn warehouse_id(&self, code: &str) -> i32 {
        warehouse::Entity::find()
            .filter(warehouse::Column::Code.eq(code))
            .one(&*self.state.db)
            .await
            .expect("warehouse query")
            .unwrap_or_else(|| panic!("warehouse {code} not found"))
            .id
    }

    pub async fn product_id(&self, code: &str) -> i32 {
        product::Entity::find()
            .filter(product::Column::Code.eq(code))
            .one(&*self.state.db)
            .await
            .expect("product query")
            .unwrap_or_else(|| panic!("product {code} not found"))
            .id
    }

    /// On-hand quantity for (product, warehouse), or None when no junction
    /// row exists.
    pub async fn stock(&self, product_id: i32, warehouse_id: i32) -> Option<i32> {
        product_warehouse::Entity::find()
            .filter(product_warehouse::Column::ProductId.eq(product_id))
            .filter(product_warehouse::Column::WarehouseId.eq(warehouse_id))
            .one(&*self.state.db)
            .await
            .expect("stock query")
            .map(|row| row.quantity)
    }

    pub async fn order_count(&self) -> u64 {
        warehouse_api::entities::order::Entity::find()
            .count(&*self.state.db)
            .await
            .expect("order count")
    }
}
