//! Variant Write Service Use Case
//!
//! Store mutations for single documents. Under the default
//! [`CacheWritePolicy::LeaveStale`] the cached listing is never touched and
//! stays stale until the next repopulation or an explicit eviction.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};
use variants_domain::constants::ALL_VARIANTS_CACHE_KEY;
use variants_domain::entities::{Variant, VariantPatch};
use variants_domain::error::Result;
use variants_domain::ports::providers::{CacheProvider, VariantStoreProvider};
use variants_domain::value_objects::{InsertedVariant, MutationOutcome, ReplaceOutcome};

use crate::domain_services::VariantWriteServiceInterface;
use crate::use_cases::policy::{bounded, CacheWritePolicy, DEFAULT_CACHE_TIMEOUT};

/// Write service implementation - store mutations plus the cache write policy
pub struct VariantWriteServiceImpl {
    store: Arc<dyn VariantStoreProvider>,
    cache: Arc<dyn CacheProvider>,
    policy: CacheWritePolicy,
    cache_timeout: Duration,
}

impl VariantWriteServiceImpl {
    /// Create new write service with the default policy
    pub fn new(store: Arc<dyn VariantStoreProvider>, cache: Arc<dyn CacheProvider>) -> Self {
        Self::with_policy(store, cache, CacheWritePolicy::default())
    }

    /// Create new write service with an explicit write policy
    pub fn with_policy(
        store: Arc<dyn VariantStoreProvider>,
        cache: Arc<dyn CacheProvider>,
        policy: CacheWritePolicy,
    ) -> Self {
        Self {
            store,
            cache,
            policy,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// Set the bound on the invalidation call
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self
    }

    /// The active write policy
    pub fn policy(&self) -> CacheWritePolicy {
        self.policy
    }

    /// Apply the write policy after a mutation that changed the store
    ///
    /// Never fails: the store already holds the new state.
    async fn after_mutation(&self, operation: &str) {
        if !self.policy.invalidates() {
            return;
        }

        match bounded(
            self.cache_timeout,
            "delete",
            self.cache.delete(ALL_VARIANTS_CACHE_KEY),
        )
        .await
        {
            Ok(removed) => {
                debug!(key = ALL_VARIANTS_CACHE_KEY, operation, removed, "cached listing invalidated");
            }
            Err(e) => {
                warn!(key = ALL_VARIANTS_CACHE_KEY, operation, error = %e, "cache invalidation failed");
            }
        }
    }
}

#[async_trait::async_trait]
impl VariantWriteServiceInterface for VariantWriteServiceImpl {
    async fn create(&self, document: Value) -> Result<InsertedVariant> {
        let variant = Variant::from_document(document)?;
        let variant_id = variant.variant_id.clone();

        let inserted = self.store.insert_one(variant).await?;
        info!(variant_id = %variant_id, inserted_id = %inserted.inserted_id, "variant created");

        self.after_mutation("create").await;
        Ok(inserted)
    }

    async fn replace(&self, variant_id: &str, document: Value) -> Result<ReplaceOutcome> {
        let variant = Variant::for_replacement(variant_id, document)?;

        let outcome = self.store.replace_one(variant_id, variant, true).await?;
        info!(
            variant_id,
            matched = outcome.matched_count,
            upserted = outcome.was_upsert(),
            "variant replaced"
        );

        self.after_mutation("replace").await;
        Ok(outcome)
    }

    async fn patch_fields(&self, variant_id: &str, fields: Value) -> Result<MutationOutcome> {
        let patch = VariantPatch::from_document(fields)?;

        let matched = self.store.update_one(variant_id, patch).await?;
        let outcome = MutationOutcome::from_count(matched);
        if outcome.is_applied() {
            info!(variant_id, "variant patched");
            self.after_mutation("patch").await;
        } else {
            warn!(variant_id, "patch matched no variant");
        }
        Ok(outcome)
    }

    async fn delete(&self, variant_id: &str) -> Result<MutationOutcome> {
        let deleted = self.store.delete_one(variant_id).await?;
        let outcome = MutationOutcome::from_count(deleted);
        if outcome.is_applied() {
            info!(variant_id, "variant deleted");
            self.after_mutation("delete").await;
        } else {
            warn!(variant_id, "delete matched no variant");
        }
        Ok(outcome)
    }
}
