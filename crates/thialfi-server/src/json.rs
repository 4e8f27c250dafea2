//! JSON request and response types for the HTTP server.

use serde::{Deserialize, Serialize};
use thialfi_core::{validate_id, MetricsSnapshot, StoreStats};

/// Publish request body.
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    /// Object that changed.
    pub object_id: String,
    /// Its new version.
    pub version: i64,
}

/// `?client_id=` query parameters.
#[derive(Debug, Deserialize)]
pub struct ClientQuery {
    pub client_id: String,
}

impl ClientQuery {
    /// The validated client ID.
    pub fn client_id(&self) -> thialfi_core::Result<&str> {
        validate_id("client_id", &self.client_id)
    }
}

/// `?object_id=` query parameters.
#[derive(Debug, Deserialize)]
pub struct ObjectQuery {
    pub object_id: String,
}

impl ObjectQuery {
    /// The validated object ID.
    pub fn object_id(&self) -> thialfi_core::Result<&str> {
        validate_id("object_id", &self.object_id)
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Sizes of the backing store.
    pub stats: StoreStats,
}

/// Store sizes and operation counters.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub store: StoreStats,
    pub service: MetricsSnapshot,
}
