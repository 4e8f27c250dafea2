//! Registration endpoints.

use std::collections::BTreeSet;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use thialfi_core::{validate_id, Registration};

use crate::error::AppError;
use crate::json::{ClientQuery, ObjectQuery};
use crate::AppState;

/// Registration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handle_register))
        .route("/unregister", post(handle_unregister))
        .route("/registrations", get(list_registrations))
        .route("/registrants", get(list_registrants))
}

fn validate(registration: &Registration) -> Result<(), AppError> {
    validate_id("client_id", &registration.client_id)?;
    validate_id("object_id", &registration.object_id)?;
    Ok(())
}

/// Register a client for an object.
async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(registration) = payload?;
    validate(&registration)?;

    state
        .service
        .register(&registration.client_id, &registration.object_id);
    Ok(StatusCode::OK)
}

/// Unregister a client from an object.
async fn handle_unregister(
    State(state): State<AppState>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(registration) = payload?;
    validate(&registration)?;

    state
        .service
        .unregister(&registration.client_id, &registration.object_id);
    Ok(StatusCode::OK)
}

/// Objects a client is registered for.
async fn list_registrations(
    State(state): State<AppState>,
    query: Result<Query<ClientQuery>, QueryRejection>,
) -> Result<Json<BTreeSet<String>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.service.registrations(query.client_id()?)))
}

/// Clients registered for an object.
async fn list_registrants(
    State(state): State<AppState>,
    query: Result<Query<ObjectQuery>, QueryRejection>,
) -> Result<Json<BTreeSet<String>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.service.registrants(query.object_id()?)))
}
