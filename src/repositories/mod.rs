//! Repositorios de persistencia
//!
//! Cada repositorio expone un conjunto pequeño de capacidades como trait,
//! con una implementación PostgreSQL y otra en memoria.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Brand, Rental, Vehicle};
use crate::utils::errors::AppResult;

pub mod brand_repository;
pub mod memory;
pub mod rental_repository;
pub mod vehicle_repository;

pub use brand_repository::PgBrandRepository;
pub use memory::InMemoryStore;
pub use rental_repository::PgRentalRepository;
pub use vehicle_repository::PgVehicleRepository;

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Brand>>;

    async fn find_all(&self) -> AppResult<Vec<Brand>>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>>;

    /// Primer vehículo del modelo, ordenado por matrícula
    async fn find_by_model_name(&self, model_name: &str) -> AppResult<Option<Vehicle>>;

    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;
}

#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Rental>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>>;

    /// Locaciones del vehículo cuyo período solapa la ventana inclusiva
    async fn find_by_vehicle_and_date_range(
        &self,
        vehicle_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Rental>>;

    /// Inserta una locación nueva
    async fn save(&self, rental: &Rental) -> AppResult<Rental>;

    /// Actualiza una locación existente; `None` si ya no existe
    async fn update(&self, rental: &Rental) -> AppResult<Option<Rental>>;

    /// Devuelve `false` si no existía
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
