//! Thialfi HTTP/JSON server.
//!
//! This crate exposes the notification service over HTTP: clients register
//! for objects, publishers post new versions, and clients poll for the
//! notifications queued for them.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, ServerConfig};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use thialfi_core::{MemStore, NotificationService};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The notification service.
    pub service: Arc<NotificationService>,
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create application state around an existing service.
    pub fn new(service: NotificationService, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            config,
        }
    }

    /// Create application state backed by a fresh in-memory store.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(NotificationService::new(Arc::new(MemStore::new())), config)
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::registration::routes())
        .merge(routes::publish::routes())
        .merge(routes::notifications::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
