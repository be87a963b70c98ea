//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los servicios reciben sus repositorios
//! por constructor, ya sea PostgreSQL o en memoria.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::repositories::{
    BrandRepository, InMemoryStore, PgBrandRepository, PgRentalRepository, PgVehicleRepository,
    RentalRepository, VehicleRepository,
};
use crate::services::{RentalService, VehicleService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub brands: Arc<dyn BrandRepository>,
    pub vehicle_service: VehicleService,
    pub rental_service: RentalService,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        brands: Arc<dyn BrandRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        rentals: Arc<dyn RentalRepository>,
    ) -> Self {
        Self {
            config,
            brands,
            vehicle_service: VehicleService::new(vehicles.clone()),
            rental_service: RentalService::new(rentals, vehicles),
        }
    }

    pub fn with_postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::new(
            config,
            Arc::new(PgBrandRepository::new(pool.clone())),
            Arc::new(PgVehicleRepository::new(pool.clone())),
            Arc::new(PgRentalRepository::new(pool)),
        )
    }

    pub fn in_memory(store: InMemoryStore, config: EnvironmentConfig) -> Self {
        let store = Arc::new(store);
        Self::new(config, store.clone(), store.clone(), store)
    }
}
