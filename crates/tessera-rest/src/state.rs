//! Application state for Axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tessera_core::{HealthCheck, Insurance, Repository, User};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn Repository<User>>,
    pub insurances: Arc<dyn Repository<Insurance>>,
    listing_root: Arc<PathBuf>,
    health_checks: Arc<[Arc<dyn HealthCheck>]>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        users: Arc<dyn Repository<User>>,
        insurances: Arc<dyn Repository<Insurance>>,
        listing_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            users,
            insurances,
            listing_root: Arc::new(listing_root.into()),
            health_checks: Arc::from(Vec::new()),
        }
    }

    /// Registers the checks consulted by the readiness endpoint.
    #[must_use]
    pub fn with_health_checks(mut self, checks: Vec<Arc<dyn HealthCheck>>) -> Self {
        self.health_checks = Arc::from(checks);
        self
    }

    /// Directory walked by `GET /demo/info`.
    #[must_use]
    pub fn listing_root(&self) -> &Path {
        &self.listing_root
    }

    /// Registered health checks.
    #[must_use]
    pub fn health_checks(&self) -> &[Arc<dyn HealthCheck>] {
        &self.health_checks
    }
}
