//! Conexión a PostgreSQL
//!
//! Este módulo abre el pool de conexiones y aplica las migraciones del schema.

use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Migraciones embebidas desde `./migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🔌 Conectando a {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .context("could not connect to the database")?;

        let connection = Self { pool };
        if config.run_migrations {
            connection.run_migrations().await?;
        }

        Ok(connection)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .context("failed to run database migrations")?;
        info!("✅ Migraciones aplicadas");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    // La contraseña puede contener '@': el separador de host es el último antes de la query
    let query_start = url.find('?').unwrap_or(url.len());
    let Some(at_pos) = url[..query_start].rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
