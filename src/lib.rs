//! Registro de locaciones de vehículos
//!
//! Servicios CRUD de locaciones sobre PostgreSQL, con validación de que
//! el vehículo pedido exista antes de reservarlo.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use utils::errors::{AppError, AppResult};
