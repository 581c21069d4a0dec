//! Application wiring.
//!
//! Every dependency is constructed here, once, at process start:
//! configuration → pool → migrations → repositories → router.

use axum::Router;
use std::sync::Arc;
use tessera_config::AppConfig;
use tessera_core::{HealthCheck, TesseraError, TesseraResult};
use tessera_repository::{
    create_pool, AdvertisementRepository, DatabasePool, InsuranceRepository,
    MySqlAdvertisementRepository, MySqlInsuranceRepository, MySqlUserRepository, UserRepository,
};
use tessera_rest::{create_router, AppState};
use tokio::signal;
use tracing::{error, info};

/// A fully wired server, ready to accept connections.
pub struct Application {
    config: AppConfig,
    pool: Arc<DatabasePool>,
    router: Router,
    advertisements: AdvertisementRepository,
}

impl Application {
    /// Connects to the database, applies migrations and builds the router.
    pub async fn build(config: AppConfig) -> TesseraResult<Self> {
        let pool = create_pool(&config.database).await?;

        if config.database.run_migrations {
            pool.run_migrations().await?;
        } else {
            info!("Skipping database migrations (database.run_migrations = false)");
        }

        let users: UserRepository = Arc::new(MySqlUserRepository::new(Arc::clone(&pool)));
        let insurances: InsuranceRepository =
            Arc::new(MySqlInsuranceRepository::new(Arc::clone(&pool)));

        let state = AppState::new(users, insurances, config.files.listing_root())
            .with_health_checks(vec![Arc::clone(&pool) as Arc<dyn HealthCheck>]);

        let router = create_router(state, &config.server);

        // Stored but not routed: advertisements have no HTTP surface.
        let advertisements: AdvertisementRepository =
            Arc::new(MySqlAdvertisementRepository::new(Arc::clone(&pool)));

        Ok(Self {
            config,
            pool,
            router,
            advertisements,
        })
    }

    /// The advertisement repository.
    #[must_use]
    pub fn advertisements(&self) -> AdvertisementRepository {
        Arc::clone(&self.advertisements)
    }

    /// Serves HTTP until Ctrl+C or SIGTERM, then closes the pool.
    pub async fn run(self) -> TesseraResult<()> {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TesseraError::Internal(format!("Failed to bind {addr}: {e}")))?;
        info!("Starting REST server on http://{}", addr);

        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TesseraError::Internal(format!("REST server error: {e}")));

        self.pool.close().await;
        served?;

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_rejects_malformed_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "not a url".to_string();

        let result = Application::build(config).await;

        assert!(matches!(result, Err(TesseraError::Configuration(_))));
    }
}
