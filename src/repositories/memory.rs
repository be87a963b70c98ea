//! Almacenamiento en memoria
//!
//! Implementa los tres repositorios sobre un único estado compartido,
//! aplicando las mismas restricciones que el schema PostgreSQL
//! (nombres de marca y matrículas únicos, clave foránea rental → vehicle).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BrandRepository, RentalRepository, VehicleRepository};
use crate::models::{Brand, Rental, Vehicle};
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct StoreData {
    brands: Vec<Brand>,
    vehicles: Vec<Vehicle>,
    rentals: HashMap<Uuid, Rental>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<StoreData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_brand(&self, brand: Brand) -> AppResult<Brand> {
        let mut data = self.data.write().await;
        if data.brands.iter().any(|b| b.name == brand.name) {
            return Err(AppError::BadRequest(format!(
                "brand '{}' already exists",
                brand.name
            )));
        }
        data.brands.push(brand.clone());
        Ok(brand)
    }

    /// Registra también la marca del modelo si todavía no existe
    pub async fn add_vehicle(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut data = self.data.write().await;
        if data
            .vehicles
            .iter()
            .any(|v| v.license_plate == vehicle.license_plate)
        {
            return Err(AppError::BadRequest(format!(
                "license plate '{}' already exists",
                vehicle.license_plate
            )));
        }

        let brand = &vehicle.model.brand;
        match data.brands.iter().find(|b| b.name == brand.name) {
            Some(existing) if existing.id != brand.id => {
                return Err(AppError::BadRequest(format!(
                    "brand '{}' already exists with another id",
                    brand.name
                )));
            }
            Some(_) => {}
            None => data.brands.push(brand.clone()),
        }

        data.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }
}

#[async_trait]
impl BrandRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Brand>> {
        let data = self.data.read().await;
        Ok(data.brands.iter().find(|b| b.name == name).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Brand>> {
        let data = self.data.read().await;
        let mut brands = data.brands.clone();
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brands)
    }
}

#[async_trait]
impl VehicleRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let data = self.data.read().await;
        Ok(data.vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_model_name(&self, model_name: &str) -> AppResult<Option<Vehicle>> {
        let data = self.data.read().await;
        Ok(data
            .vehicles
            .iter()
            .filter(|v| v.model.name == model_name)
            .min_by(|a, b| a.license_plate.cmp(&b.license_plate))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let data = self.data.read().await;
        let mut vehicles = data.vehicles.clone();
        vehicles.sort_by(|a, b| a.license_plate.cmp(&b.license_plate));
        Ok(vehicles)
    }
}

fn ensure_vehicle(data: &StoreData, rental: &Rental) -> AppResult<()> {
    if !data.vehicles.iter().any(|v| v.id == rental.vehicle_id) {
        return Err(AppError::Internal(format!(
            "rental {} references unknown vehicle {}",
            rental.id, rental.vehicle_id
        )));
    }
    Ok(())
}

fn sorted(mut rentals: Vec<Rental>) -> Vec<Rental> {
    rentals.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
    rentals
}

#[async_trait]
impl RentalRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        let data = self.data.read().await;
        Ok(sorted(data.rentals.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>> {
        let data = self.data.read().await;
        Ok(data.rentals.get(&id).cloned())
    }

    async fn find_by_vehicle_and_date_range(
        &self,
        vehicle_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Rental>> {
        let data = self.data.read().await;
        Ok(sorted(
            data.rentals
                .values()
                .filter(|r| r.vehicle_id == vehicle_id && r.overlaps(start, end))
                .cloned()
                .collect(),
        ))
    }

    async fn save(&self, rental: &Rental) -> AppResult<Rental> {
        let mut data = self.data.write().await;
        ensure_vehicle(&data, rental)?;
        if data.rentals.contains_key(&rental.id) {
            return Err(AppError::BadRequest(format!(
                "rental {} already exists",
                rental.id
            )));
        }

        data.rentals.insert(rental.id, rental.clone());
        Ok(rental.clone())
    }

    async fn update(&self, rental: &Rental) -> AppResult<Option<Rental>> {
        let mut data = self.data.write().await;
        ensure_vehicle(&data, rental)?;

        // Existencia y escritura bajo el mismo lock; created_at no se toca
        let Some(existing) = data.rentals.get_mut(&rental.id) else {
            return Ok(None);
        };
        existing.vehicle_id = rental.vehicle_id;
        existing.start_date = rental.start_date;
        existing.end_date = rental.end_date;
        existing.value = rental.value;
        existing.updated_at = rental.updated_at;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.rentals.remove(&id).is_some())
    }
}
