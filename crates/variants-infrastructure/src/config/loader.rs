//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, CacheConfig, LoggingConfig, ServerConfig, StoreConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_file, parse_log_level};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::env;
use std::path::{Path, PathBuf};
use variants_application::ports::registry::{list_cache_providers, list_variant_store_providers};
use variants_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first one discovered)
    /// 3. `REDIS_URL` and `MONGODB_URI`
    /// 4. Prefixed environment variables (e.g., `VARIANTS__SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Build the merged figment without extracting it
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_file(config_path, true);
            }
            Some(config_path) => log_config_file(config_path, false),
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_file(&default_path, true);
                }
            }
        }

        figment
            .merge(
                Env::raw()
                    .only(&[REDIS_URL_ENV])
                    .map(|_| "cache.uri".into()),
            )
            .merge(
                Env::raw()
                    .only(&[MONGODB_URI_ENV])
                    .map(|_| "store.uri".into()),
            )
            .merge(
                Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                    .split(CONFIG_ENV_SEPARATOR),
            )
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing configuration file among the usual locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_store_config(&config.store)?;
    validate_cache_config(&config.cache)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_server_config(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if server.host.trim().is_empty() {
        return Err(Error::configuration("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_store_config(store: &StoreConfig) -> Result<()> {
    let available: Vec<&str> = list_variant_store_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    if !available.contains(&store.provider.as_str()) {
        return Err(Error::configuration(format!(
            "Unknown store provider '{}'. Available providers: {:?}",
            store.provider, available
        )));
    }
    validate_uri("store", &store.provider, store.uri.as_deref())?;
    if store.database.trim().is_empty() || store.collection.trim().is_empty() {
        return Err(Error::configuration(
            "Store database and collection names cannot be empty",
        ));
    }
    Ok(())
}

fn validate_cache_config(cache: &CacheConfig) -> Result<()> {
    let available: Vec<&str> = list_cache_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    if !available.contains(&cache.provider.as_str()) {
        return Err(Error::configuration(format!(
            "Unknown cache provider '{}'. Available providers: {:?}",
            cache.provider, available
        )));
    }
    validate_uri("cache", &cache.provider, cache.uri.as_deref())?;
    if cache.operation_timeout_ms == 0 {
        return Err(Error::configuration(
            "Cache operation timeout cannot be 0",
        ));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}

fn validate_uri(section: &str, provider: &str, uri: Option<&str>) -> Result<()> {
    let missing = uri.map_or(true, |uri| uri.trim().is_empty());
    if missing && URI_REQUIRED_PROVIDERS.contains(&provider) {
        return Err(Error::configuration(format!(
            "{section}.uri is required for the '{provider}' provider"
        )));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set store configuration
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Set cache configuration
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Use the process-local providers (in-memory store, Moka cache)
    pub fn with_local_providers(mut self) -> Self {
        self.config.store.provider = "memory".to_string();
        self.config.store.uri = None;
        self.config.cache.provider = "moka".to_string();
        self.config.cache.uri = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn build_validated(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
