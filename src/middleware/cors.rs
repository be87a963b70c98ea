//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::EnvironmentConfig;

/// Orígenes configurados si los hay; sin ellos, permisivo solo en desarrollo
/// y sin orígenes cruzados en cualquier otro entorno
pub fn cors_middleware(config: &EnvironmentConfig) -> CorsLayer {
    if !config.cors_origins.is_empty() {
        return cors_middleware_with_origins(&config.cors_origins);
    }
    if config.is_development() {
        return CorsLayer::very_permissive();
    }
    CorsLayer::new()
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Origen CORS inválido ignorado: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}
