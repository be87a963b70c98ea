//! Modelo de Rental
//!
//! Reserva de un vehículo por un período inclusivo con un valor asociado.
//! Mapea exactamente a la tabla `rentals`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Rental {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rental {
    /// La identidad se asigna en la creación
    pub fn new(vehicle_id: Uuid, start_date: NaiveDate, end_date: NaiveDate, value: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            start_date,
            end_date,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    /// Solapamiento inclusivo con la ventana [start, end]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Cantidad de días cubiertos, contando ambos extremos
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 8, d).unwrap()
    }

    #[test]
    fn test_overlaps_is_inclusive() {
        let rental = Rental::new(Uuid::new_v4(), date(6), date(16), Decimal::new(40, 0));
        assert!(rental.overlaps(date(6), date(16)));
        assert!(rental.overlaps(date(16), date(20)));
        assert!(rental.overlaps(date(1), date(6)));
        assert!(rental.overlaps(date(10), date(11)));
        assert!(!rental.overlaps(date(17), date(20)));
        assert!(!rental.overlaps(date(1), date(5)));
    }

    #[test]
    fn test_days() {
        let rental = Rental::new(Uuid::new_v4(), date(6), date(16), Decimal::ZERO);
        assert_eq!(rental.days(), 11);
        let same_day = Rental::new(Uuid::new_v4(), date(6), date(6), Decimal::ZERO);
        assert_eq!(same_day.days(), 1);
    }
}
