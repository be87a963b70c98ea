//! Servicio de vehículos
//!
//! Resuelve vehículos por nombre de modelo para la capa de locaciones.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, vehicle_not_found_error, AppResult};

#[derive(Clone)]
pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleService {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    /// Falla con `VehicleNotFound` si ningún vehículo pertenece al modelo
    pub async fn find_by_model_name(&self, model_name: &str) -> AppResult<Vehicle> {
        debug!("Buscando vehículo para el modelo '{}'", model_name);

        match self.repository.find_by_model_name(model_name).await? {
            Some(vehicle) => {
                debug!("Modelo '{}' resuelto a {}", model_name, vehicle.license_plate);
                Ok(vehicle)
            }
            None => {
                warn!("Ningún vehículo registrado para el modelo '{}'", model_name);
                Err(vehicle_not_found_error(model_name))
            }
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }

    pub async fn list_all(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.find_all().await
    }
}
