//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | Always misses, accepts every write |
//! | [`MokaCacheProvider`] | Local | In-memory cache for a single instance |
//! | [`RedisCacheProvider`] | Distributed | Shared cache for multi-instance deployments |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `moka` or `null`
//! - **Multi Instance**: `redis`, so every instance sees the same snapshot

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

pub use variants_domain::ports::providers::cache::CacheEntryConfig;
