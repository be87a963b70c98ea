//! Servicio de locaciones
//!
//! Crea, lista, actualiza y elimina locaciones. Antes de persistir una
//! locación valida que exista un vehículo para el modelo pedido.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::vehicle_service::VehicleService;
use crate::models::Rental;
use crate::repositories::{RentalRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{ensure_period, ensure_rental_value};

#[derive(Clone)]
pub struct RentalService {
    rentals: Arc<dyn RentalRepository>,
    vehicles: VehicleService,
}

impl RentalService {
    pub fn new(
        rentals: Arc<dyn RentalRepository>,
        vehicles: Arc<dyn VehicleRepository>,
    ) -> Self {
        Self {
            rentals,
            vehicles: VehicleService::new(vehicles),
        }
    }

    /// Reserva el vehículo del modelo para el período indicado
    pub async fn create(
        &self,
        model_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        value: Decimal,
    ) -> AppResult<Rental> {
        ensure_period(start_date, end_date)?;
        ensure_rental_value(&value)?;

        let vehicle = self.vehicles.find_by_model_name(model_name).await?;
        let rental = Rental::new(vehicle.id, start_date, end_date, value);
        let saved = self.rentals.save(&rental).await?;

        info!(
            "Locación {} creada para {} ({} → {}, valor {})",
            saved.id, vehicle.license_plate, saved.start_date, saved.end_date, saved.value
        );
        Ok(saved)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Rental>> {
        self.rentals.find_all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Rental> {
        self.rentals
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Rental", &id.to_string()))
    }

    pub async fn find_by_vehicle_and_date_range(
        &self,
        vehicle_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Rental>> {
        ensure_period(start, end)?;

        let rentals = self
            .rentals
            .find_by_vehicle_and_date_range(vehicle_id, start, end)
            .await?;
        debug!(
            "{} locaciones para el vehículo {} entre {} y {}",
            rentals.len(),
            vehicle_id,
            start,
            end
        );
        Ok(rentals)
    }

    /// Persiste los cambios de una locación existente
    pub async fn update(&self, rental: Rental) -> AppResult<Rental> {
        ensure_period(rental.start_date, rental.end_date)?;
        ensure_rental_value(&rental.value)?;

        match self.vehicles.find_by_id(rental.vehicle_id).await {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => {
                return Err(AppError::VehicleNotFound(format!(
                    "vehicle {} referenced by rental {} does not exist",
                    rental.vehicle_id, rental.id
                )));
            }
            Err(e) => return Err(e),
        }

        let mut changed = rental;
        changed.updated_at = Utc::now();
        let Some(saved) = self.rentals.update(&changed).await? else {
            warn!("Intento de actualizar la locación inexistente {}", changed.id);
            return Err(not_found_error("Rental", &changed.id.to_string()));
        };

        info!("Locación {} actualizada (valor {})", saved.id, saved.value);
        Ok(saved)
    }

    pub async fn delete(&self, rental: &Rental) -> AppResult<()> {
        if !self.rentals.delete(rental.id).await? {
            warn!("Intento de eliminar la locación inexistente {}", rental.id);
            return Err(not_found_error("Rental", &rental.id.to_string()));
        }

        info!("Locación {} eliminada", rental.id);
        Ok(())
    }
}
