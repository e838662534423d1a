//! Provider Constants
//!
//! Defaults used when a provider is resolved without explicit settings.

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the in-memory cache
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default Redis connection URI
pub const REDIS_DEFAULT_URI: &str = "redis://127.0.0.1:6379";

// ============================================================================
// VARIANT STORE PROVIDER CONSTANTS
// ============================================================================

/// Default MongoDB connection URI
pub const MONGODB_DEFAULT_URI: &str = "mongodb://127.0.0.1:27017";

/// Default MongoDB database name
pub const MONGODB_DEFAULT_DATABASE: &str = "covid";

/// Name of the unique index on the business key
pub const MONGODB_VARIANT_ID_INDEX: &str = "variant_id_unique";
