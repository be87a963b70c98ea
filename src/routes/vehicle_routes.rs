use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/by-model/:model_name", get(get_vehicle_by_model))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let vehicles = state.vehicle_service.list_all().await?;
    Ok(Json(vehicles.into_iter().map(Into::into).collect()))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let vehicle = state.vehicle_service.find_by_id(id).await?;
    Ok(Json(vehicle.into()))
}

async fn get_vehicle_by_model(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<VehicleResponse>, AppError> {
    let vehicle = state.vehicle_service.find_by_model_name(&model_name).await?;
    Ok(Json(vehicle.into()))
}
