use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rental_registry::config::{DatabaseConfig, EnvironmentConfig};
use rental_registry::database::DatabaseConnection;
use rental_registry::routes::create_router;
use rental_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rental_registry=debug,tower_http=info")),
        )
        .init();

    info!("🚗 Rental Registry");
    info!("==================");

    let config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    info!("⚙️  Entorno: {}", config.environment);
    if !config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️  CORS_ORIGINS vacío fuera de desarrollo: se rechazan orígenes cruzados");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::with_postgres(
        db_connection.pool().clone(),
        config,
    ));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health");
    info!("   GET    /api/brands | /api/brands/:name");
    info!("   GET    /api/vehicles | /api/vehicles/:id | /api/vehicles/by-model/:model_name");
    info!("   POST   /api/rentals");
    info!("   GET    /api/rentals | /api/rentals/:id | /api/rentals/search");
    info!("   PUT    /api/rentals/:id");
    info!("   DELETE /api/rentals/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
