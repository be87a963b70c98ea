use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::Rental;
use crate::utils::validation::{validate_period, validate_rental_value};

// Request para crear una locación
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_create_period"))]
pub struct CreateRentalRequest {
    #[validate(length(min = 1, max = 100))]
    pub model_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(custom = "validate_rental_value")]
    pub value: Decimal,
}

fn validate_create_period(request: &CreateRentalRequest) -> Result<(), ValidationError> {
    validate_period(request.start_date, request.end_date)
}

// Request para actualizar una locación; los campos ausentes se conservan
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRentalRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(custom = "validate_rental_value")]
    pub value: Option<Decimal>,
}

impl UpdateRentalRequest {
    pub fn apply_to(self, mut rental: Rental) -> Rental {
        if let Some(start_date) = self.start_date {
            rental.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            rental.end_date = end_date;
        }
        if let Some(value) = self.value {
            rental.value = value;
        }
        rental
    }
}

// Query de búsqueda por vehículo y ventana de fechas
#[derive(Debug, Deserialize)]
pub struct RentalSearchQuery {
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// Response de locación
#[derive(Debug, Serialize, Deserialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            days: rental.days(),
            id: rental.id,
            vehicle_id: rental.vehicle_id,
            start_date: rental.start_date,
            end_date: rental.end_date,
            value: rental.value,
            created_at: rental.created_at,
            updated_at: rental.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 8, d).unwrap()
    }

    #[test]
    fn test_create_request_rejects_inverted_period() {
        let request = CreateRentalRequest {
            model_name: "Fiesta 1.0".to_string(),
            start_date: date(16),
            end_date: date(6),
            value: Decimal::new(40, 0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_model() {
        let request = CreateRentalRequest {
            model_name: String::new(),
            start_date: date(6),
            end_date: date(16),
            value: Decimal::new(40, 0),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("model_name"));
    }

    #[test]
    fn test_create_request_from_json() {
        let request: CreateRentalRequest = serde_json::from_str(
            r#"{"model_name":"Fiesta 1.0","start_date":"2019-08-06","end_date":"2019-08-16","value":40}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.value, Decimal::new(40, 0));
    }

    #[test]
    fn test_update_request_keeps_missing_fields() {
        let rental = Rental::new(Uuid::new_v4(), date(6), date(16), Decimal::new(40, 0));
        let request = UpdateRentalRequest {
            start_date: None,
            end_date: None,
            value: Some(Decimal::new(20, 0)),
        };
        let changed = request.apply_to(rental.clone());
        assert_eq!(changed.value, Decimal::new(20, 0));
        assert_eq!(changed.start_date, rental.start_date);
        assert_eq!(changed.end_date, rental.end_date);
    }
}
