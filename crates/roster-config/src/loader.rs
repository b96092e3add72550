//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use roster_core::{RosterError, RosterResult};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable prefix for overrides, e.g. `ROSTER_SERVER__PORT`.
///
/// `ROSTER_SERVER__CORS_ORIGINS` takes a comma-separated list.
pub const ENV_PREFIX: &str = "ROSTER";

/// Loads and validates the application configuration.
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
    /// 4. Environment variables with `ROSTER_` prefix
    ///
    /// The environment is read from `ROSTER_ENVIRONMENT` and defaults to
    /// `development`.
    pub fn new(config_dir: impl Into<String>) -> RosterResult<Self> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var("ROSTER_ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());

        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> RosterResult<Self> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Returns the directory configuration files were read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    fn load_config(config_dir: &str, environment: &str) -> RosterResult<AppConfig> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
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
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_origins"),
        );

        let mut app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize::<AppConfig>)
            .map_err(config_error_to_roster_error)?;

        app_config.app.environment = environment.to_string();

        if app_config.app.environment == "production" && app_config.server.allows_any_origin() {
            warn!("CORS allows any origin in production");
        }

        ConfigValidator::validate(&app_config)
            .map_err(|errors| RosterError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogFormat;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn dir_str(dir: &TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    #[test]
    #[serial]
    fn test_missing_files_yield_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_config(&dir_str(&dir), "development").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.app.environment, "development");
    }

    #[test]
    #[serial]
    fn test_layered_files_override_in_order() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[server]\nport = 9000\nhost = \"127.0.0.1\"\n\n[observability]\nlog_format = \"json\"\n",
        );
        write(&dir, "staging.toml", "[server]\nport = 9100\n");
        write(&dir, "local.toml", "[observability]\nlog_level = \"debug\"\n");

        let config = ConfigLoader::load_config(&dir_str(&dir), "staging").unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.app.environment, "staging");
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 9000\n");

        std::env::set_var("ROSTER_SERVER__PORT", "9200");
        let result = ConfigLoader::load_config(&dir_str(&dir), "development");
        std::env::remove_var("ROSTER_SERVER__PORT");

        assert_eq!(result.unwrap().server.port, 9200);
    }

    #[test]
    #[serial]
    fn test_cors_origins_environment_override() {
        let dir = TempDir::new().unwrap();

        std::env::set_var(
            "ROSTER_SERVER__CORS_ORIGINS",
            "https://app.example,https://admin.example",
        );
        let result = ConfigLoader::load_config(&dir_str(&dir), "development");
        std::env::remove_var("ROSTER_SERVER__CORS_ORIGINS");

        assert_eq!(
            result.unwrap().server.cors_origins,
            vec!["https://app.example", "https://admin.example"]
        );
    }

    #[test]
    #[serial]
    fn test_single_cors_origin_environment_override() {
        let dir = TempDir::new().unwrap();

        std::env::set_var("ROSTER_SERVER__CORS_ORIGINS", "https://app.example");
        let result = ConfigLoader::load_config(&dir_str(&dir), "development");
        std::env::remove_var("ROSTER_SERVER__CORS_ORIGINS");

        let config = result.unwrap();
        assert_eq!(config.server.cors_origins, vec!["https://app.example"]);
        assert!(!config.server.allows_any_origin());
    }

    #[test]
    #[serial]
    fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 0\n");

        let err = ConfigLoader::load_config(&dir_str(&dir), "development").unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server\nport = ");

        let err = ConfigLoader::load_config(&dir_str(&dir), "development").unwrap_err();
        assert!(matches!(err, RosterError::Configuration(_)));
    }

    #[test]
    #[serial]
    fn test_new_reads_environment_name() {
        let dir = TempDir::new().unwrap();
        write(&dir, "qa.toml", "[server]\nport = 9300\n");

        std::env::set_var("ROSTER_ENVIRONMENT", "qa");
        let result = ConfigLoader::new(dir_str(&dir));
        std::env::remove_var("ROSTER_ENVIRONMENT");

        let loader = result.unwrap();
        assert_eq!(loader.get().server.port, 9300);
        assert_eq!(loader.get().app.environment, "qa");
        assert_eq!(loader.config_dir(), dir_str(&dir));
        assert_eq!(loader.into_config().server.port, 9300);
    }
}
