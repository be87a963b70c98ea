//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del servidor.

use anyhow::{Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            None => defaults.port,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
