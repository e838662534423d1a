//! Provider Resolvers
//!
//! Translate configuration sections into registry configs and resolve
//! providers by name through the linkme registry.
//!
//! ```text
//! AppConfig → Resolver → linkme registry → Arc<dyn Provider>
//! ```

use crate::config::{AppConfig, CacheConfig, StoreConfig};
use std::sync::Arc;
use variants_application::ports::providers::{CacheProvider, VariantStoreProvider};
use variants_application::ports::registry::{
    list_cache_providers, list_variant_store_providers, resolve_cache_provider,
    resolve_variant_store_provider, CacheProviderConfig, VariantStoreProviderConfig,
};

/// Registry config for the cache section
pub fn cache_config_to_registry(config: &CacheConfig) -> CacheProviderConfig {
    let mut registry_config = CacheProviderConfig::new(&config.provider)
        .with_max_size(usize::try_from(config.max_entries).unwrap_or(usize::MAX))
        .with_ttl_secs(config.ttl_secs);
    if let Some(uri) = &config.uri {
        registry_config = registry_config.with_uri(uri);
    }
    registry_config
}

/// Registry config for the store section
pub fn store_config_to_registry(config: &StoreConfig) -> VariantStoreProviderConfig {
    let mut registry_config = VariantStoreProviderConfig::new(&config.provider)
        .with_database(&config.database)
        .with_collection(&config.collection);
    if let Some(uri) = &config.uri {
        registry_config = registry_config.with_uri(uri);
    }
    registry_config
}

/// Resolver for cache providers
pub struct CacheProviderResolver {
    config: Arc<AppConfig>,
}

impl CacheProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn CacheProvider>, String> {
        resolve_cache_provider(&cache_config_to_registry(&self.config.cache))
    }

    /// List available cache providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_cache_providers()
    }
}

impl std::fmt::Debug for CacheProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheProviderResolver")
            .field("provider", &self.config.cache.provider)
            .finish()
    }
}

/// Resolver for variant store providers
pub struct VariantStoreProviderResolver {
    config: Arc<AppConfig>,
}

impl VariantStoreProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn VariantStoreProvider>, String> {
        resolve_variant_store_provider(&store_config_to_registry(&self.config.store))
    }

    /// List available store providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_variant_store_providers()
    }
}

impl std::fmt::Debug for VariantStoreProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantStoreProviderResolver")
            .field("provider", &self.config.store.provider)
            .finish()
    }
}
