pub mod brand_routes;
pub mod rental_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Router completo de la API con CORS y trazas HTTP
pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);

    Router::new()
        .route("/health", get(health))
        .nest("/api/brands", brand_routes::create_brand_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/rentals", rental_routes::create_rental_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "rental-registry",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
