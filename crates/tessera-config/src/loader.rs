//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tessera_core::TesseraError;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Environment variable prefix for overrides, e.g. `TESSERA_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "TESSERA";

/// Environment variable selecting the `{environment}.toml` layer.
pub const ENVIRONMENT_VAR: &str = "TESSERA_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `TESSERA_` prefix
    ///
    /// The environment name comes from `TESSERA_ENVIRONMENT` and defaults to
    /// `development`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, TesseraError> {
        // Load .env file if present, before reading TESSERA_ENVIRONMENT
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(
        config_dir: impl Into<PathBuf>,
        environment: impl Into<String>,
    ) -> Result<Self, TesseraError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = load_config(&config_dir, &environment, None)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, TesseraError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Returns the active environment name.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place when the new one fails to
    /// load or validate.
    pub async fn reload(&self) -> Result<(), TesseraError> {
        let new_config = load_config(&self.config_dir, &self.environment, None)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

/// Builds, deserializes and validates the layered configuration.
///
/// `env_source` replaces the process environment when set.
fn load_config(
    config_dir: &Path,
    environment: &str,
    env_source: Option<Map<String, String>>,
) -> Result<AppConfig, TesseraError> {
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for name in ["default", environment, "local"] {
        let path = config_dir.join(format!("{name}.toml"));
        if path.exists() {
            debug!("Loading config layer from: {}", path.display());
            builder = builder
                .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env_source),
    );

    let app_config = builder
        .build()
        .and_then(Config::try_deserialize::<AppConfig>)
        .map_err(config_error_to_tessera_error)?;

    ConfigValidator::validate(&app_config)
        .map_err(|errors| TesseraError::Configuration(format_validation_errors(&errors)))?;

    Ok(app_config)
}

fn config_error_to_tessera_error(err: ConfigError) -> TesseraError {
    TesseraError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_empty_dir_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), "development", env(&[])).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.files.listing_root, "classpathname");
    }

    #[test]
    fn test_environment_layer_overrides_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 8000\nhost = \"127.0.0.1\"\n");
        write(&dir, "staging.toml", "[server]\nport = 8100\n");

        let config = load_config(dir.path(), "staging", env(&[])).unwrap();
        assert_eq!(config.server.port, 8100);
        assert_eq!(config.server.host, "127.0.0.1");

        let config = load_config(dir.path(), "production", env(&[])).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_local_layer_wins_over_environment() {
        let dir = TempDir::new().unwrap();
        write(&dir, "development.toml", "[files]\nlisting_root = \"dev\"\n");
        write(&dir, "local.toml", "[files]\nlisting_root = \"mine\"\n");

        let config = load_config(dir.path(), "development", env(&[])).unwrap();
        assert_eq!(config.files.listing_root, "mine");
    }

    #[test]
    fn test_env_vars_win_over_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 8000\n");

        let config = load_config(
            dir.path(),
            "development",
            env(&[
                ("TESSERA_SERVER__PORT", "9001"),
                ("TESSERA_DATABASE__MAX_CONNECTIONS", "25"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9001);
        assert_eq!(config.database.max_connections, 25);
    }

    #[test]
    fn test_serialized_section_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let server = ServerConfig {
            port: 7070,
            ..ServerConfig::default()
        };
        let body = toml::to_string(&server).unwrap();
        write(&dir, "default.toml", &format!("[server]\n{body}"));

        let config = load_config(dir.path(), "development", env(&[])).unwrap();
        assert_eq!(config.server.port, 7070);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[database]\nurl = \"sqlite://nope\"\n");

        let err = load_config(dir.path(), "development", env(&[])).unwrap_err();
        assert!(matches!(err, TesseraError::Configuration(ref m) if m.contains("database URL")));
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server\nport = ");

        let err = load_config(dir.path(), "development", env(&[])).unwrap_err();
        assert!(matches!(err, TesseraError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_reload_and_get_value() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 8000\n");
        let loader = ConfigLoader::with_environment(dir.path(), "test").unwrap();
        assert_eq!(loader.environment(), "test");
        assert_eq!(loader.get_value::<u16>("server.port").await, Some(8000));

        write(&dir, "default.toml", "[server]\nport = 8001\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.server.port, 8001);
        assert_eq!(loader.get_value::<u16>("server.missing").await, None);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 8000\n");
        let loader = ConfigLoader::with_environment(dir.path(), "test").unwrap();

        write(&dir, "default.toml", "[server]\nport = 0\n");
        assert!(loader.reload().await.is_err());
        assert_eq!(loader.get().await.server.port, 8000);
    }
}
