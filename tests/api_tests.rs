mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rental_registry::config::EnvironmentConfig;
use rental_registry::routes::create_router;
use rental_registry::state::AppState;

use common::*;

// Función helper para crear la app de test
async fn create_test_app() -> Router {
    let store = seeded_store().await;
    create_router(AppState::in_memory(store, EnvironmentConfig::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

async fn allowed_origin(config: EnvironmentConfig) -> Option<String> {
    let app = create_router(AppState::in_memory(seeded_store().await, config));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "http://client.test")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    response
        .headers()
        .get("access-control-allow-origin")
        .map(|value| value.to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_cors_policy_follows_environment() {
    let development = EnvironmentConfig::default();
    assert_eq!(
        allowed_origin(development).await.as_deref(),
        Some("http://client.test")
    );

    let production = EnvironmentConfig {
        environment: "production".to_string(),
        ..EnvironmentConfig::default()
    };
    assert_eq!(allowed_origin(production).await, None);

    let configured = EnvironmentConfig {
        environment: "production".to_string(),
        cors_origins: vec!["http://client.test".to_string()],
        ..EnvironmentConfig::default()
    };
    assert_eq!(
        allowed_origin(configured).await.as_deref(),
        Some("http://client.test")
    );
}

#[tokio::test]
async fn test_vehicle_by_model() {
    let app = create_test_app().await;
    let (status, body) = send(&app, "GET", "/api/vehicles/by-model/Palio%201.0", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["license_plate"], PALIO_PLATE);
    assert_eq!(body["brand"], BRAND_FIAT);
    assert_eq!(body["kind"]["type"], "car");
    assert_eq!(body["kind"]["doors"], 4);
}

#[tokio::test]
async fn test_brand_lookup() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "GET", "/api/brands/Fiat", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], BRAND_FIAT);

    let (status, body) = send(&app, "GET", "/api/brands/Renault", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_rental() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "model_name": MODEL_FIESTA,
            "start_date": "2019-08-06",
            "end_date": "2019-08-16",
            "value": 40
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["vehicle_id"], FIESTA_ID.to_string());
    assert_eq!(body["data"]["days"], 11);

    let (_, list) = send(&app, "GET", "/api/rentals", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_rental_for_unknown_model() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "model_name": "Palio 1.8",
            "start_date": "2019-08-06",
            "end_date": "2019-08-16",
            "value": 80
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "VEHICLE_NOT_FOUND");

    let (_, list) = send(&app, "GET", "/api/rentals", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_rental_with_inverted_period() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "model_name": MODEL_FIESTA,
            "start_date": "2019-08-16",
            "end_date": "2019-08-06",
            "value": 40
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_rental_value_outside_column_precision() {
    let app = create_test_app().await;

    for value in ["40.125", "10000000000"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/rentals",
            Some(json!({
                "model_name": MODEL_FIESTA,
                "start_date": "2019-08-06",
                "end_date": "2019-08-16",
                "value": value
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "value {}", value);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/rentals/{}", SEEDED_RENTAL_ID),
        Some(json!({ "value": "40.125" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, list) = send(&app, "GET", "/api/rentals", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_update_and_delete_rental() {
    let app = create_test_app().await;
    let search_uri = format!(
        "/api/rentals/search?vehicle_id={}&start_date=2019-08-06&end_date=2019-08-16",
        PALIO_ID
    );

    let (status, found) = send(&app, "GET", &search_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().unwrap().clone();
    assert_eq!(found.len(), 1);
    let id = found[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/rentals/{}", id),
        Some(json!({ "value": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["start_date"], "2019-08-06");

    let (_, reloaded) = send(&app, "GET", &format!("/api/rentals/{}", id), None).await;
    let value: rust_decimal::Decimal = reloaded["value"].as_str().unwrap().parse().unwrap();
    assert_eq!(value, rust_decimal::Decimal::new(20, 0));

    let (status, _) = send(&app, "DELETE", &format!("/api/rentals/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, "GET", &search_uri, None).await;
    assert!(after.as_array().unwrap().is_empty());

    let (status, _) = send(&app, "DELETE", &format!("/api/rentals/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
