use std::{env, net::SocketAddr, path::Path, sync::OnceLock};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::{author::repository::AuthorRecord, error::AppResult};

/// Application configuration.
///
/// Contains all configuration settings for the catalog service,
/// including server, database, and tracing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Server configuration settings
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_address: SocketAddr,
    /// Path serving the author list
    #[serde(default = "default_authors_path")]
    pub authors_path: String,
}

/// Database configuration.
///
/// Only in-memory storage is supported.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum DatabaseConfig {
    /// In-memory database storage
    Memory(MemoryDatabaseConfig),
}

/// In-memory database configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryDatabaseConfig {
    /// Authors loaded into the store on startup
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
}

/// Tracing configuration.
///
/// Controls how tracing data is output from the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum TracingConfig {
    /// Log events only, no span export
    Memory,
    /// Standard output tracing
    Stdout,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG_PATH";
const ENV_PREFIX: &str = "CATALOG";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISTRIBUTION_VERSION_KEY: &str = "distribution.version";

fn default_authors_path() -> String {
    "/authors".into()
}

impl AppConfig {
    /// Gets the global application configuration instance.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be loaded.
    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Self::load().unwrap_or_else(|err| panic!("failed to load configuration: {err}"))
        })
    }

    /// Loads configuration from the directory named by `CATALOG_CONFIG_PATH`,
    /// or `config` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());
        Self::load_from(config_path)
    }

    /// Loads configuration from files in `config_path` and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_from<P: AsRef<Path>>(config_path: P) -> AppResult<Self> {
        let config_path = config_path.as_ref();

        let mut config_builder =
            Config::builder().set_default(DISTRIBUTION_VERSION_KEY, VERSION)?;

        // Initial "default" configuration file
        let default_path = config_path.join("default");
        config_builder =
            config_builder.add_source(File::with_name(&default_path.to_string_lossy()));

        // Local overrides, not checked in
        let local_path = config_path.join("local");
        config_builder = config_builder
            .add_source(File::with_name(&local_path.to_string_lossy()).required(false));

        // Add in settings from the environment (with a prefix of CATALOG)
        config_builder =
            config_builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(config_builder.build()?.try_deserialize()?)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig::Memory(MemoryDatabaseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default() {
        let config = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();

        assert_eq!(config.distribution.name, "catalog_service");
        assert!(config.distribution.version.is_some());
        assert_eq!(config.server.authors_path, "/authors");
        assert!(matches!(config.tracing, TracingConfig::Stdout));

        let DatabaseConfig::Memory(memory) = &config.database;
        let austen = memory
            .authors
            .iter()
            .find(|author| author.family_name == "Austen")
            .unwrap();
        assert_eq!(austen.first_name, "Jane");
        assert_eq!(austen.date_of_birth.map(|date| date.year()), Some(1775));
        assert_eq!(austen.date_of_death.map(|date| date.year()), Some(1817));
    }

    #[test]
    fn missing_directory() {
        assert!(AppConfig::load_from("/nonexistent/catalog/config").is_err());
    }
}
