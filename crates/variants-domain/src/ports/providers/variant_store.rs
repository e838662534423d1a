//! Variant Store Provider Port
//!
//! Port for the durable document store holding the variant collection.
//! The store is the source of truth; every failure reported here is fatal
//! for the request that caused it.

use crate::entities::{Variant, VariantPatch};
use crate::error::Result;
use crate::value_objects::{InsertedVariant, ReplaceOutcome};
use async_trait::async_trait;

/// Variant Store Provider Port
///
/// Documents are addressed by their `variant_id` business key. Stores must
/// keep `variant_id` unique and return [`find_all`](Self::find_all) results
/// in a stable order.
///
/// # Implementations
///
/// - **InMemory**: process-local store for development and tests
/// - **MongoDB**: durable store with a unique index on `variant_id`
#[async_trait]
pub trait VariantStoreProvider: Send + Sync + std::fmt::Debug {
    /// Read the whole collection
    async fn find_all(&self) -> Result<Vec<Variant>>;

    /// Read a single document by business key
    async fn find_one(&self, variant_id: &str) -> Result<Option<Variant>>;

    /// Insert a new document
    async fn insert_one(&self, variant: Variant) -> Result<InsertedVariant>;

    /// Replace the document matching `variant_id`
    ///
    /// With `upsert` set, a missing document is created.
    async fn replace_one(
        &self,
        variant_id: &str,
        variant: Variant,
        upsert: bool,
    ) -> Result<ReplaceOutcome>;

    /// Merge fields into the document matching `variant_id`
    ///
    /// # Returns
    /// Number of matched documents (0 or 1)
    async fn update_one(&self, variant_id: &str, patch: VariantPatch) -> Result<u64>;

    /// Delete the document matching `variant_id`
    ///
    /// # Returns
    /// Number of deleted documents (0 or 1)
    async fn delete_one(&self, variant_id: &str) -> Result<u64>;

    /// Verify the store is reachable
    async fn health_check(&self) -> Result<()>;

    /// Release connections held by the provider
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
