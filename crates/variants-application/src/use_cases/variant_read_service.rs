//! Variant Read Service Use Case
//!
//! Cache-aside read path for the full collection. The listing is looked up
//! under a single key; a miss or any cache failure falls through to the
//! store, and a successful store read overwrites the cached snapshot.

use std::sync::Arc;

use tracing::{debug, error, warn};
use variants_domain::constants::ALL_VARIANTS_CACHE_KEY;
use variants_domain::entities::Variant;
use variants_domain::error::{Error, Result};
use variants_domain::ports::providers::{CacheProvider, VariantStoreProvider};
use variants_domain::value_objects::{ListProvenance, VariantListing};

use crate::domain_services::VariantReadServiceInterface;
use crate::use_cases::policy::{bounded, ReadPathOptions};

/// Read service implementation - cache first, store as source of truth
pub struct VariantReadServiceImpl {
    cache: Arc<dyn CacheProvider>,
    store: Arc<dyn VariantStoreProvider>,
    options: ReadPathOptions,
}

impl VariantReadServiceImpl {
    /// Create new read service with injected dependencies
    pub fn new(cache: Arc<dyn CacheProvider>, store: Arc<dyn VariantStoreProvider>) -> Self {
        Self::with_options(cache, store, ReadPathOptions::default())
    }

    /// Create new read service with explicit read path options
    pub fn with_options(
        cache: Arc<dyn CacheProvider>,
        store: Arc<dyn VariantStoreProvider>,
        options: ReadPathOptions,
    ) -> Self {
        Self {
            cache,
            store,
            options,
        }
    }

    /// Fetch and decode the cached listing
    ///
    /// An undecodable entry is reported as a cache error.
    async fn cached_listing(&self) -> Result<Option<Vec<Variant>>> {
        let raw = bounded(
            self.options.cache_timeout,
            "get",
            self.cache.get_json(ALL_VARIANTS_CACHE_KEY),
        )
        .await?;

        raw.map(|json| {
            serde_json::from_str::<Vec<Variant>>(&json)
                .map_err(|e| Error::cache_with_source("cached listing is not decodable", e))
        })
        .transpose()
    }

    /// Overwrite the cached listing with a fresh store snapshot
    async fn repopulate(&self, records: &[Variant]) -> Result<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| Error::cache_with_source("failed to encode listing", e))?;

        bounded(
            self.options.cache_timeout,
            "set",
            self.cache
                .set_json(ALL_VARIANTS_CACHE_KEY, &json, self.options.entry.clone()),
        )
        .await
    }
}

#[async_trait::async_trait]
impl VariantReadServiceInterface for VariantReadServiceImpl {
    async fn list_all(&self) -> Result<VariantListing> {
        let provider = self.cache.provider_name();
        let mut cache_failed = false;

        match self.cached_listing().await {
            Ok(Some(records)) => {
                debug!(key = ALL_VARIANTS_CACHE_KEY, provider, count = records.len(), "cache hit");
                return Ok(VariantListing::new(records, ListProvenance::CacheHit));
            }
            Ok(None) => {
                debug!(key = ALL_VARIANTS_CACHE_KEY, provider, "cache miss");
            }
            Err(e) => {
                warn!(key = ALL_VARIANTS_CACHE_KEY, provider, error = %e, "cache read failed, reading from store");
                cache_failed = true;
            }
        }

        let records = self.store.find_all().await.map_err(|e| {
            error!(store = self.store.provider_name(), error = %e, "store read failed");
            e
        })?;

        if let Err(e) = self.repopulate(&records).await {
            warn!(key = ALL_VARIANTS_CACHE_KEY, provider, error = %e, "cache repopulation failed");
            cache_failed = true;
        } else {
            debug!(key = ALL_VARIANTS_CACHE_KEY, provider, count = records.len(), "cache repopulated");
        }

        let provenance = if cache_failed {
            ListProvenance::CacheErrorStoreOk
        } else {
            ListProvenance::CacheMissStoreOk
        };
        Ok(VariantListing::new(records, provenance))
    }

    async fn get_by_variant_id(&self, variant_id: &str) -> Result<Option<Variant>> {
        self.store.find_one(variant_id).await
    }

    async fn invalidate_listing(&self) -> Result<bool> {
        let removed = bounded(
            self.options.cache_timeout,
            "delete",
            self.cache.delete(ALL_VARIANTS_CACHE_KEY),
        )
        .await?;
        debug!(key = ALL_VARIANTS_CACHE_KEY, removed, "cached listing evicted");
        Ok(removed)
    }
}
