//! Redis distributed cache provider
//!
//! Shared cache for deployments running several API instances. A single
//! [`ConnectionManager`] is established on first use and shared by every
//! request; a failed connection attempt is reported as a cache error and
//! attempted again on the next call.
//!
//! ## Example
//!
//! ```ignore
//! use variants_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379")?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;
use variants_domain::error::{Error, Result};
use variants_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};

use crate::constants::REDIS_DEFAULT_URI;

/// Redis cache provider
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    address: String,
    connection: Arc<OnceCell<ConnectionManager>>,
    default_ttl_secs: u64,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// Only the URI is validated here; no connection is made until the
    /// first cache call.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::cache_with_source("Failed to create Redis client", e))?;

        let address = connection_string
            .rsplit_once('@')
            .map_or(connection_string, |(_, host)| host)
            .trim_start_matches("redis://")
            .to_string();

        Ok(Self {
            client,
            address,
            connection: Arc::new(OnceCell::new()),
            default_ttl_secs: 0,
        })
    }

    /// Apply a TTL to entries written without one, zero meaning none
    pub fn with_default_ttl_secs(mut self, secs: u64) -> Self {
        self.default_ttl_secs = secs;
        self
    }

    /// Get the shared connection, establishing it on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                ConnectionManager::new(self.client.clone())
                    .await
                    .map_err(|e| Error::cache_with_source("Failed to connect to Redis", e))
            })
            .await?;
        Ok(manager.clone())
    }

    /// Server address without credentials
    pub fn server_address(&self) -> &str {
        &self.address
    }

    /// Whether a connection has been established
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }
}

fn redis_error(command: &str, e: redis::RedisError) -> Error {
    Error::cache_with_source(format!("Redis {command} failed"), e)
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        conn.get(key).await.map_err(|e| redis_error("GET", e))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;

        let ttl_seconds = config
            .effective_ttl()
            .map(|ttl| ttl.as_secs().max(1))
            .unwrap_or(self.default_ttl_secs);

        let result: redis::RedisResult<()> = if ttl_seconds > 0 {
            conn.set_ex(key, value, ttl_seconds).await
        } else {
            conn.set(key, value).await
        };
        result.map_err(|e| redis_error("SET", e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let count: i64 = conn.del(key).await.map_err(|e| redis_error("DEL", e))?;
        Ok(count > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let count: i64 = conn
            .exists(key)
            .await
            .map_err(|e| redis_error("EXISTS", e))?;
        Ok(count > 0)
    }

    async fn health_check(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| redis_error("PING", e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server_address())
            .field("connected", &self.is_connected())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use variants_application::ports::registry::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

/// Factory function for creating Redis cache provider instances.
fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let provider = RedisCacheProvider::new(uri)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?
        .with_default_ttl_secs(config.ttl_secs.unwrap_or(0));

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis distributed cache shared across instances",
    factory: redis_cache_factory,
};
