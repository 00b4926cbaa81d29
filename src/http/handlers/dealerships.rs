//! `/dealerships` handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::http::request::JsonBody;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::{Dealership, DealershipFields, ResourceId};

pub async fn list_dealerships(State(state): State<AppState>) -> Json<Vec<Dealership>> {
    let store = state.store.read().await;
    Json(store.dealerships().to_vec())
}

pub async fn create_dealership(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<DealershipFields>,
) -> (StatusCode, Json<Dealership>) {
    let mut store = state.store.write().await;
    let created = store.create_dealership(fields).clone();
    metrics::record_store_size(&store);

    tracing::info!(dealership_id = created.id, "Dealership created");
    (StatusCode::CREATED, Json(created))
}

pub async fn get_dealership(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
) -> Result<Json<Dealership>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.dealership(id)?.clone()))
}

pub async fn update_dealership(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
    JsonBody(fields): JsonBody<DealershipFields>,
) -> Result<Json<Dealership>, ApiError> {
    let mut store = state.store.write().await;
    let updated = store.update_dealership(id, fields)?.clone();

    tracing::info!(dealership_id = updated.id, "Dealership updated");
    Ok(Json(updated))
}

pub async fn delete_dealership(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let removed = store.delete_dealership(id)?;
    metrics::record_store_size(&store);

    tracing::info!(
        dealership_id = removed.id,
        cars_removed = removed.cars.len(),
        "Dealership deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
