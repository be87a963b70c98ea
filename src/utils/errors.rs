//! Sistema de manejo de errores
//!
//! Este módulo define los errores del dominio de locaciones
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Código estable expuesto a los clientes de la API
    pub fn code(&self) -> &'static str {
        match self {
            AppError::VehicleNotFound(_) => "VEHICLE_NOT_FOUND",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DB_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code().to_string();

        let (status, error_response) = match self {
            AppError::VehicleNotFound(msg) => {
                warn!("Vehicle not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Vehicle Not Found".to_string(),
                        message: msg,
                        details: None,
                        code,
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code,
                    },
                )
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code,
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code,
                    },
                )
            }

            AppError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code,
                    },
                )
            }

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación a partir de un
/// `ValidationError` ya construido, conservando sus parámetros
pub fn field_validation_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para el caso de modelo sin vehículo asociado
pub fn vehicle_not_found_error(model_name: &str) -> AppError {
    AppError::VehicleNotFound(format!("no vehicle registered for model '{}'", model_name))
}
