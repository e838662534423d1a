//! Variant Service Interfaces

use async_trait::async_trait;
use serde_json::Value;
use variants_domain::entities::Variant;
use variants_domain::error::Result;
use variants_domain::value_objects::{
    InsertedVariant, MutationOutcome, ReplaceOutcome, VariantListing,
};

// ============================================================================
// Read Service Interface
// ============================================================================

/// Variant Read Service Interface
///
/// Serves the full collection through the cache and single documents
/// straight from the store.
#[async_trait]
pub trait VariantReadServiceInterface: Send + Sync {
    /// List the whole collection, reporting where the records came from
    ///
    /// Cache failures never fail this call; store failures always do.
    async fn list_all(&self) -> Result<VariantListing>;

    /// Look up one document by business key, bypassing the cache
    async fn get_by_variant_id(&self, variant_id: &str) -> Result<Option<Variant>>;

    /// Evict the cached listing
    ///
    /// # Returns
    /// True if an entry was removed
    async fn invalidate_listing(&self) -> Result<bool>;
}

// ============================================================================
// Write Service Interface
// ============================================================================

/// Variant Write Service Interface
///
/// Every operation mutates the store. Whether the cached listing is touched
/// depends on the configured write policy.
#[async_trait]
pub trait VariantWriteServiceInterface: Send + Sync {
    /// Insert a new document built from a client payload
    async fn create(&self, document: Value) -> Result<InsertedVariant>;

    /// Replace (or create) the document stored under `variant_id`
    async fn replace(&self, variant_id: &str, document: Value) -> Result<ReplaceOutcome>;

    /// Merge the supplied fields into the document stored under `variant_id`
    async fn patch_fields(&self, variant_id: &str, fields: Value) -> Result<MutationOutcome>;

    /// Remove the document stored under `variant_id`
    async fn delete(&self, variant_id: &str) -> Result<MutationOutcome>;
}

