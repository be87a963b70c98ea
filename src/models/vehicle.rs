//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, sus subtipos y el mapeo explícito
//! desde las filas de PostgreSQL (join vehicles → models → brands).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::brand::Brand;
use super::vehicle_model::VehicleModel;
use crate::utils::errors::AppError;

/// Subtipo del vehículo - mapea a la columna `kind` y sus columnas opcionales
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleKind {
    Car { doors: i32 },
    Motorcycle { displacement_cc: i32 },
}

/// Vehicle principal - la matrícula es el identificador de negocio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub model: VehicleModel,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn new(model: VehicleModel, license_plate: impl Into<String>, kind: VehicleKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            license_plate: license_plate.into(),
            model,
            kind,
        }
    }
}

/// Fila plana devuelta por las consultas de vehículos
#[derive(Debug, FromRow)]
pub struct VehicleRow {
    pub id: Uuid,
    pub license_plate: String,
    pub kind: String,
    pub doors: Option<i32>,
    pub displacement_cc: Option<i32>,
    pub model_id: Uuid,
    pub model_name: String,
    pub model_year: i32,
    pub model_version: Option<String>,
    pub brand_id: Uuid,
    pub brand_name: String,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = AppError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        let kind = match (row.kind.as_str(), row.doors, row.displacement_cc) {
            ("car", Some(doors), _) => VehicleKind::Car { doors },
            ("motorcycle", _, Some(displacement_cc)) => VehicleKind::Motorcycle { displacement_cc },
            (other, _, _) => {
                return Err(AppError::Internal(format!(
                    "vehicle {} has inconsistent kind '{}'",
                    row.license_plate, other
                )))
            }
        };

        Ok(Vehicle {
            id: row.id,
            license_plate: row.license_plate,
            model: VehicleModel {
                id: row.model_id,
                name: row.model_name,
                year: row.model_year,
                version: row.model_version,
                brand: Brand {
                    id: row.brand_id,
                    name: row.brand_name,
                },
            },
            kind,
        })
    }
}
