//! Publish endpoint.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use thialfi_core::{validate_id, Object};

use crate::error::AppError;
use crate::json::PublishRequest;
use crate::AppState;

/// Publish routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/publish", post(handle_publish))
        .route("/objects/:object_id/version", get(object_version))
}

/// Record a new object version and notify its registrants.
async fn handle_publish(
    State(state): State<AppState>,
    payload: Result<Json<PublishRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;
    let object_id = validate_id("object_id", &request.object_id)?;

    state.service.publish(object_id, request.version);
    Ok(StatusCode::OK)
}

/// Current version of an object.
async fn object_version(
    State(state): State<AppState>,
    object_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Object>, AppError> {
    let Path(object_id) = object_id?;
    let version = state.service.object_version(&object_id);
    Ok(Json(Object {
        id: object_id,
        version,
    }))
}
