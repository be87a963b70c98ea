//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos de la cadena
//! Brand → VehicleModel → Vehicle y las locaciones (Rental).

pub mod brand;
pub mod rental;
pub mod vehicle;
pub mod vehicle_model;

pub use brand::Brand;
pub use rental::Rental;
pub use vehicle::{Vehicle, VehicleKind, VehicleRow};
pub use vehicle_model::VehicleModel;
