//! Modelo de VehicleModel
//!
//! Diseño de vehículo con año y versión, perteneciente a exactamente una Brand.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::brand::Brand;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleModel {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub version: Option<String>,
    pub brand: Brand,
}

impl VehicleModel {
    pub fn new(brand: Brand, name: impl Into<String>, year: i32, version: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            year,
            version,
            brand,
        }
    }
}
