//! `/dealerships/{id}/cars` handlers.
//!
//! Dealership lookup always happens first, so a request naming a missing
//! dealership reports "Dealership not found" whatever the car id is.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::http::request::JsonBody;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::{Car, CarFields, ResourceId};

pub async fn list_cars(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
) -> Result<Json<Vec<Car>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.cars(id)?.to_vec()))
}

pub async fn create_car(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
    JsonBody(fields): JsonBody<CarFields>,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    let mut store = state.store.write().await;
    let created = store.create_car(id, fields)?.clone();
    metrics::record_store_size(&store);

    tracing::info!(dealership_id = %id, car_id = created.id, "Car created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_car(
    State(state): State<AppState>,
    Path((id, car_id)): Path<(ResourceId, ResourceId)>,
) -> Result<Json<Car>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.car(id, car_id)?.clone()))
}

pub async fn update_car(
    State(state): State<AppState>,
    Path((id, car_id)): Path<(ResourceId, ResourceId)>,
    JsonBody(fields): JsonBody<CarFields>,
) -> Result<Json<Car>, ApiError> {
    let mut store = state.store.write().await;
    let updated = store.update_car(id, car_id, fields)?.clone();

    tracing::info!(dealership_id = %id, car_id = updated.id, "Car updated");
    Ok(Json(updated))
}

pub async fn delete_car(
    State(state): State<AppState>,
    Path((id, car_id)): Path<(ResourceId, ResourceId)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let removed = store.delete_car(id, car_id)?;
    metrics::record_store_size(&store);

    tracing::info!(dealership_id = %id, car_id = removed.id, "Car deleted");
    Ok(StatusCode::NO_CONTENT)
}
