//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CacheConfig, LoggingConfig, ServerConfig, StoreConfig};

/// Root configuration, one field per TOML section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
