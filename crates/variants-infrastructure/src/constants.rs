//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `variants_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "variants.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "variants";

/// Environment variable prefix for configuration (`VARIANTS__SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "VARIANTS";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional variable holding the Redis connection string
pub const REDIS_URL_ENV: &str = "REDIS_URL";

/// Conventional variable holding the MongoDB connection string
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 2000;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Default variant store provider
pub const DEFAULT_STORE_PROVIDER: &str = "mongodb";

/// Default MongoDB connection URI
pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";

/// Default database name
pub const DEFAULT_STORE_DATABASE: &str = "covid";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache provider
pub const DEFAULT_CACHE_PROVIDER: &str = "redis";

/// Default Redis connection URI
pub const DEFAULT_REDIS_URI: &str = "redis://127.0.0.1:6379";

/// Default maximum entries for local caches
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default bound on a single cache call in milliseconds
pub const CACHE_DEFAULT_OPERATION_TIMEOUT_MS: u64 = 500;

/// Providers that cannot work without a connection URI
pub const URI_REQUIRED_PROVIDERS: &[&str] = &["redis", "mongodb"];

// ============================================================================
// HEALTH CHECK CONSTANTS
// ============================================================================

/// Upper bound on a single dependency health check in milliseconds
pub const HEALTH_CHECK_TIMEOUT_MS: u64 = 2_000;

/// Health check name for the document store
pub const HEALTH_CHECK_STORE: &str = "store";

/// Health check name for the cache
pub const HEALTH_CHECK_CACHE: &str = "cache";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "VARIANTS_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "variants";
