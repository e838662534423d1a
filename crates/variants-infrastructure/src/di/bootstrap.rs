//! Application bootstrap
//!
//! Builds the [`AppContext`]: the long-lived store and cache clients, the
//! read and write services sharing them, and the health registry. The
//! context owns the clients' lifecycle; [`AppContext::shutdown`] releases
//! them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//! let listing = context.read_service().list_all().await?;
//! context.shutdown().await;
//! ```

use crate::config::AppConfig;
use crate::di::provider_resolvers::{CacheProviderResolver, VariantStoreProviderResolver};
use crate::health::{HealthRegistry, HealthResponse};
use std::sync::Arc;
use tracing::{info, warn};
use variants_application::domain_services::{
    VariantReadServiceInterface, VariantWriteServiceInterface,
};
use variants_application::use_cases::{VariantReadServiceImpl, VariantWriteServiceImpl};
use variants_domain::error::{Error, Result};
use variants_domain::ports::{CacheProvider, VariantStoreProvider};

/// Application context shared by every request handler
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    cache: Arc<dyn CacheProvider>,
    store: Arc<dyn VariantStoreProvider>,
    read_service: Arc<dyn VariantReadServiceInterface>,
    write_service: Arc<dyn VariantWriteServiceInterface>,
    health: HealthRegistry,
}

impl AppContext {
    /// Wire services around already constructed providers
    pub fn from_providers(
        config: Arc<AppConfig>,
        cache: Arc<dyn CacheProvider>,
        store: Arc<dyn VariantStoreProvider>,
    ) -> Self {
        let read_service: Arc<dyn VariantReadServiceInterface> =
            Arc::new(VariantReadServiceImpl::with_options(
                cache.clone(),
                store.clone(),
                config.cache.read_path_options(),
            ));
        let write_service: Arc<dyn VariantWriteServiceInterface> = Arc::new(
            VariantWriteServiceImpl::with_policy(
                store.clone(),
                cache.clone(),
                config.cache.write_policy,
            )
            .with_cache_timeout(config.cache.operation_timeout()),
        );
        let health = HealthRegistry::for_providers(store.clone(), cache.clone());

        Self {
            config,
            cache,
            store,
            read_service,
            write_service,
            health,
        }
    }

    /// Get the cache provider
    pub fn cache(&self) -> Arc<dyn CacheProvider> {
        self.cache.clone()
    }

    /// Get the variant store provider
    pub fn store(&self) -> Arc<dyn VariantStoreProvider> {
        self.store.clone()
    }

    /// Get the read service
    pub fn read_service(&self) -> Arc<dyn VariantReadServiceInterface> {
        self.read_service.clone()
    }

    /// Get the write service
    pub fn write_service(&self) -> Arc<dyn VariantWriteServiceInterface> {
        self.write_service.clone()
    }

    /// Probe the store and the cache
    pub async fn health_report(&self) -> HealthResponse {
        self.health.perform_health_checks().await
    }

    /// Release the cache and store clients
    ///
    /// Close failures are logged; shutdown always completes.
    pub async fn shutdown(&self) {
        if let Err(e) = self.cache.close().await {
            warn!(provider = self.cache.provider_name(), error = %e, "cache close failed");
        }
        if let Err(e) = self.store.close().await {
            warn!(provider = self.store.provider_name(), error = %e, "store close failed");
        }
        info!("Providers closed");
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache", &self.cache.provider_name())
            .field("store", &self.store.provider_name())
            .field("write_policy", &self.config.cache.write_policy)
            .field("health", &self.health)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from configuration
///
/// Providers are registered via linkme distributed slices when
/// variants-providers is linked. Connections are established lazily, so an
/// unreachable backend does not fail startup.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let shared = Arc::new(config);

    let store = VariantStoreProviderResolver::new(shared.clone())
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Store: {e}")))?;

    let cache = CacheProviderResolver::new(shared.clone())
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Cache: {e}")))?;

    info!(
        "Resolved providers: store={}, cache={}, write_policy={}",
        store.provider_name(),
        cache.provider_name(),
        shared.cache.write_policy
    );

    Ok(AppContext::from_providers(shared, cache, store))
}

/// Initialize an application context backed by process-local providers
pub async fn init_test_app() -> Result<AppContext> {
    let config = crate::config::ConfigBuilder::new()
        .with_local_providers()
        .build();
    init_app(config).await
}
