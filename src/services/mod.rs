//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios reciben sus repositorios por constructor.

pub mod rental_service;
pub mod vehicle_service;

pub use rental_service::RentalService;
pub use vehicle_service::VehicleService;
