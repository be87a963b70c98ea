use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Brand, Vehicle, VehicleKind};

// Response de vehículo, con la cadena modelo → marca aplanada
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub model: String,
    pub model_year: i32,
    pub model_version: Option<String>,
    pub brand: String,
    pub kind: VehicleKind,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            license_plate: vehicle.license_plate,
            model: vehicle.model.name,
            model_year: vehicle.model.year,
            model_version: vehicle.model.version,
            brand: vehicle.model.brand.name,
            kind: vehicle.kind,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrandResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}
