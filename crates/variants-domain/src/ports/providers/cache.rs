//! Cache Provider Port
//!
//! Port for cache backend providers. Supports in-memory (Moka), distributed
//! (Redis), and null providers for testing.
//!
//! The cache is derived and disposable: every failure reported through this
//! port is recoverable by going to the document store instead.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// Entries never expire unless a TTL is set; absence of a key is the only
/// invalidation signal the read path understands.
///
/// # Example
///
/// ```
/// use variants_domain::ports::providers::cache::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::persistent().with_ttl(Duration::from_secs(600));
/// assert_eq!(config.effective_ttl(), Some(Duration::from_secs(600)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry, `None` keeps it until overwritten
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Entry without expiry
    pub fn persistent() -> Self {
        Self { ttl: None }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds, zero meaning no expiry
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    /// The TTL to apply, if any
    pub fn effective_ttl(&self) -> Option<Duration> {
        self.ttl.filter(|ttl| !ttl.is_zero())
    }
}

/// Cache Provider Port
///
/// Defines the contract for cache backend providers. Values are JSON
/// strings; the caller owns serialization.
///
/// # Implementations
///
/// - **Moka**: In-memory cache local to one process
/// - **Redis**: Shared cache for multi-instance deployments
/// - **Null**: Always misses, accepts every write
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as JSON string
    ///
    /// # Returns
    /// The cached JSON string if present, `None` if not found or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Set a value in the cache from JSON string, overwriting any previous value
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Verify the backend is reachable
    async fn health_check(&self) -> Result<()> {
        self.exists("health:probe").await.map(|_| ())
    }

    /// Release connections held by the provider
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "moka", "redis", "null")
    fn provider_name(&self) -> &str;
}
