//! Warehouse API Library
//!
//! Core functionality for the warehouse management backend: product and
//! warehouse catalogs plus transactional stock transfers between warehouses.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]

// Core modules
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod seeding;
pub mod services;

use std::sync::Arc;

use axum::{response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

/// The `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/orders", handlers::orders::orders_router())
        .nest("/product", handlers::products::products_router())
        .nest("/warehouse", handlers::warehouses::warehouses_router())
}

/// Builds the application router with the shared state applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "warehouse-api up" }))
        .route("/health", get(health))
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
