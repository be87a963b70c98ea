//! Modelo de Brand
//!
//! Fabricante de un modelo de vehículo. Mapea a la tabla `brands`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Brand principal - el nombre es único y obligatorio
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
