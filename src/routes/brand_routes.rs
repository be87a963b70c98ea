use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::vehicle_dto::BrandResponse;
use crate::repositories::BrandRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_brand_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands))
        .route("/:name", get(get_brand))
}

async fn list_brands(State(state): State<AppState>) -> Result<Json<Vec<BrandResponse>>, AppError> {
    let brands = state.brands.find_all().await?;
    Ok(Json(brands.into_iter().map(Into::into).collect()))
}

async fn get_brand(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BrandResponse>, AppError> {
    let brand = state
        .brands
        .find_by_name(&name)
        .await?
        .ok_or_else(|| not_found_error("Brand", &name))?;
    Ok(Json(brand.into()))
}
