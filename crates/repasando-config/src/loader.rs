//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use repasando_core::RepasandoError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "REPASANDO";

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `REPASANDO_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RepasandoError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RepasandoError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the directory the configuration was read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Consumes the loader and returns the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, RepasandoError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(format!("{}_ENVIRONMENT", ENV_PREFIX))
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_repasando_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_repasando_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), RepasandoError> {
    let url = config.database.url.trim();
    if url.is_empty() {
        return Err(RepasandoError::Configuration("Database URL is required".to_string()));
    }
    if !(url.starts_with("mysql:") || url.starts_with("sqlite:")) {
        return Err(RepasandoError::Configuration(format!(
            "Unsupported database URL scheme: {}",
            url.split(':').next().unwrap_or_default()
        )));
    }

    if config.database.min_connections > config.database.max_connections {
        return Err(RepasandoError::Configuration(format!(
            "database.min_connections ({}) exceeds database.max_connections ({})",
            config.database.min_connections, config.database.max_connections
        )));
    }

    let pagination = &config.pagination;
    if pagination.default_page_size == 0 {
        return Err(RepasandoError::Configuration(
            "pagination.default_page_size must be >= 1".to_string(),
        ));
    }
    if pagination.default_page_size > pagination.max_page_size {
        return Err(RepasandoError::Configuration(format!(
            "pagination.default_page_size ({}) exceeds pagination.max_page_size ({})",
            pagination.default_page_size, pagination.max_page_size
        )));
    }

    if config.app.environment == "production" && url.starts_with("sqlite::memory:") {
        warn!("Using an in-memory database in production; data will not survive a restart");
    }

    Ok(())
}

fn config_error_to_repasando_error(err: ConfigError) -> RepasandoError {
    RepasandoError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_default(dir: &Path, contents: &str) {
        fs::write(dir.join("default.toml"), contents).unwrap();
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            r#"
            [server]
            port = 9000

            [database]
            url = "sqlite::memory:"

            [pagination]
            default_page_size = 25
            "#,
        );

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.max_page_size, 100);
    }

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let config = ConfigLoader::new(missing.to_string_lossy()).unwrap().into_config();
        assert_eq!(config.pagination.default_page_size, 10);
    }

    #[test]
    fn test_rejects_zero_default_page_size() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            r#"
            [pagination]
            default_page_size = 0
            "#,
        );

        let result = ConfigLoader::new(dir.path().to_string_lossy());
        assert!(matches!(result, Err(RepasandoError::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_scheme() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/db".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_default_above_max() {
        let mut config = AppConfig::default();
        config.pagination.default_page_size = 200;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }
}
