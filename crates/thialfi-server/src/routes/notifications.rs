//! Notification endpoints.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use thialfi_core::Notification;

use crate::error::AppError;
use crate::json::ClientQuery;
use crate::AppState;

/// Notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(fetch_notifications))
        .route("/notifications/pending", get(pending_notifications))
}

/// Return and clear every pending notification for a client.
async fn fetch_notifications(
    State(state): State<AppState>,
    query: Result<Query<ClientQuery>, QueryRejection>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.service.fetch(query.client_id()?)))
}

/// Pending notifications for a client, left in the queue.
async fn pending_notifications(
    State(state): State<AppState>,
    query: Result<Query<ClientQuery>, QueryRejection>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.service.pending(query.client_id()?)))
}
