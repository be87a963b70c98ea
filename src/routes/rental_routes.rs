use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::rental_dto::{
    CreateRentalRequest, RentalResponse, RentalSearchQuery, UpdateRentalRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/search", get(search_rentals))
        .route(
            "/:id",
            get(get_rental).put(update_rental).delete(delete_rental),
        )
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RentalResponse>>), AppError> {
    request.validate()?;

    let rental = state
        .rental_service
        .create(
            &request.model_name,
            request.start_date,
            request.end_date,
            request.value,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            RentalResponse::from(rental),
            "Rental created",
        )),
    ))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let rentals = state.rental_service.list_all().await?;
    Ok(Json(rentals.into_iter().map(Into::into).collect()))
}

async fn search_rentals(
    State(state): State<AppState>,
    Query(query): Query<RentalSearchQuery>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let rentals = state
        .rental_service
        .find_by_vehicle_and_date_range(query.vehicle_id, query.start_date, query.end_date)
        .await?;
    Ok(Json(rentals.into_iter().map(Into::into).collect()))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let rental = state.rental_service.find_by_id(id).await?;
    Ok(Json(rental.into()))
}

async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRentalRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    request.validate()?;

    let current = state.rental_service.find_by_id(id).await?;
    let rental = state
        .rental_service
        .update(request.apply_to(current))
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        RentalResponse::from(rental),
        "Rental updated",
    )))
}

async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let rental = state.rental_service.find_by_id(id).await?;
    state.rental_service.delete(&rental).await?;
    Ok(Json(ApiResponse::message("Rental deleted")))
}
