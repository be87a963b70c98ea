//! Carga inicial compartida por los tests de integración.
//! Refleja `tests/fixtures/initial_load.sql`.

#![allow(dead_code)]

use chrono::NaiveDate;
use rental_registry::models::{Brand, Rental, Vehicle, VehicleKind, VehicleModel};
use rental_registry::repositories::{InMemoryStore, RentalRepository};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const BRAND_FIAT: &str = "Fiat";
pub const MODEL_PALIO: &str = "Palio 1.0";
pub const MODEL_FIESTA: &str = "Fiesta 1.0";
pub const PALIO_PLATE: &str = "JSQ-0101";
pub const FIESTA_PLATE: &str = "JSQ-0202";

pub const PALIO_ID: Uuid = Uuid::from_u128(0xc001);
pub const FIESTA_ID: Uuid = Uuid::from_u128(0xc002);
pub const SEEDED_RENTAL_ID: Uuid = Uuid::from_u128(0xd001);

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 8, 6).unwrap()
}

pub fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 8, 16).unwrap()
}

pub async fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();

    let fiat = Brand {
        id: Uuid::from_u128(0xb001),
        name: BRAND_FIAT.to_string(),
    };
    let ford = Brand {
        id: Uuid::from_u128(0xb002),
        name: "Ford".to_string(),
    };

    let palio = VehicleModel {
        id: Uuid::from_u128(0xa001),
        name: MODEL_PALIO.to_string(),
        year: 2012,
        version: Some("Fire".to_string()),
        brand: fiat,
    };
    let fiesta = VehicleModel {
        id: Uuid::from_u128(0xa002),
        name: MODEL_FIESTA.to_string(),
        year: 2014,
        version: Some("Rocam".to_string()),
        brand: ford,
    };

    store
        .add_vehicle(Vehicle {
            id: PALIO_ID,
            license_plate: PALIO_PLATE.to_string(),
            model: palio,
            kind: VehicleKind::Car { doors: 4 },
        })
        .await
        .unwrap();
    store
        .add_vehicle(Vehicle {
            id: FIESTA_ID,
            license_plate: FIESTA_PLATE.to_string(),
            model: fiesta,
            kind: VehicleKind::Car { doors: 4 },
        })
        .await
        .unwrap();

    let mut rental = Rental::new(PALIO_ID, start_date(), end_date(), Decimal::new(10000, 2));
    rental.id = SEEDED_RENTAL_ID;
    store.save(&rental).await.unwrap();

    store
}
