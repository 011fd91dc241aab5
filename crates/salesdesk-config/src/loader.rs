//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use salesdesk_core::SalesDeskError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader.
#[derive(Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `SALESDESK_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, SalesDeskError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, SalesDeskError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, SalesDeskError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("SALESDESK_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (SALESDESK_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("SALESDESK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_error)?;

        let app_config: AppConfig = match config.try_deserialize() {
            Ok(config) => config,
            // No sources at all falls back to compiled-in defaults.
            Err(ConfigError::NotFound(_)) => AppConfig::default(),
            Err(e) => return Err(config_error_to_error(e)),
        };

        // Validate critical configuration
        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), SalesDeskError> {
        if config.database.url.is_empty() {
            return Err(SalesDeskError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if config.database.max_connections == 0 {
            return Err(SalesDeskError::Configuration(
                "Database pool needs at least one connection".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_error_to_error(err: ConfigError) -> SalesDeskError {
    SalesDeskError::Configuration(err.to_string())
}
