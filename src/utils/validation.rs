//! Utilidades de validación
//!
//! Reglas de dominio compartidas entre los DTOs de la API y los servicios.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::utils::errors::{field_validation_error, AppResult};

/// El período es inclusivo en ambos extremos: start == end es válido
pub fn validate_period(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        let mut error = ValidationError::new("period");
        error.message = Some("end_date must not precede start_date".into());
        error.add_param("start_date".into(), &start.to_string());
        error.add_param("end_date".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

/// Decimales que admite la columna `rentals.value NUMERIC(12, 2)`
pub const RENTAL_VALUE_SCALE: u32 = 2;

/// Mayor valor representable en `NUMERIC(12, 2)`
pub fn max_rental_value() -> Decimal {
    Decimal::new(999_999_999_999, RENTAL_VALUE_SCALE)
}

/// Valor no negativo, con a lo sumo dos decimales y dentro del rango de la columna
pub fn validate_rental_value(value: &Decimal) -> Result<(), ValidationError> {
    let reject = |code: &'static str, message: &'static str| {
        let mut error = ValidationError::new(code);
        error.message = Some(message.into());
        error.add_param("value".into(), &value.to_string());
        error
    };

    if value.is_sign_negative() && !value.is_zero() {
        return Err(reject("non_negative", "value must not be negative"));
    }
    if value.normalize().scale() > RENTAL_VALUE_SCALE {
        return Err(reject("scale", "value must have at most two decimal places"));
    }
    if *value > max_rental_value() {
        let mut error = reject("range", "value exceeds the maximum rental value");
        error.add_param("max".into(), &max_rental_value().to_string());
        return Err(error);
    }
    Ok(())
}

/// Variante para la capa de servicios, ya traducida a `AppError`
pub fn ensure_period(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    validate_period(start, end).map_err(|error| field_validation_error("end_date", error))
}

pub fn ensure_rental_value(value: &Decimal) -> AppResult<()> {
    validate_rental_value(value).map_err(|error| field_validation_error("value", error))
}
