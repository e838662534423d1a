//! Null cache provider
//!
//! A cache provider implementation that doesn't store anything. Selecting it
//! turns every listing into a store read.

use async_trait::async_trait;
use variants_domain::error::Result;
use variants_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};

/// Null cache provider that doesn't store anything
///
/// This provider always returns None for gets and accepts all sets
/// without storing the data.
///
/// # Example
///
/// ```rust
/// use variants_providers::cache::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use variants_application::ports::registry::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "No-op cache, every read goes to the store",
    factory: |_config: &CacheProviderConfig| Ok(std::sync::Arc::new(NullCacheProvider::new())),
};
