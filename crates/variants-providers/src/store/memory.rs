//! In-memory variant store
//!
//! Keeps the collection in insertion order behind a lock. Nothing survives
//! a restart.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use variants_domain::constants::VARIANT_ID_FIELD;
use variants_domain::entities::{Variant, VariantPatch};
use variants_domain::error::{Error, Result};
use variants_domain::ports::providers::VariantStoreProvider;
use variants_domain::value_objects::{InsertedVariant, ReplaceOutcome};

/// In-memory variant store provider
#[derive(Debug, Default)]
pub struct InMemoryVariantStore {
    documents: RwLock<Vec<Variant>>,
}

impl InMemoryVariantStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `variants`
    ///
    /// Seed documents without an identity get one assigned.
    pub fn with_variants(variants: Vec<Variant>) -> Self {
        let documents = variants
            .into_iter()
            .map(|mut variant| {
                if variant.id.is_none() {
                    variant.id = Some(new_document_id());
                }
                variant
            })
            .collect();
        Self {
            documents: RwLock::new(documents),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Variant>>> {
        self.documents
            .read()
            .map_err(|_| Error::database("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Variant>>> {
        self.documents
            .write()
            .map_err(|_| Error::database("in-memory store lock poisoned"))
    }
}

fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn duplicate_key(variant_id: &str) -> Error {
    Error::database(format!("duplicate key: variant_id '{variant_id}' already exists"))
}

#[async_trait]
impl VariantStoreProvider for InMemoryVariantStore {
    async fn find_all(&self) -> Result<Vec<Variant>> {
        Ok(self.read()?.clone())
    }

    async fn find_one(&self, variant_id: &str) -> Result<Option<Variant>> {
        Ok(self
            .read()?
            .iter()
            .find(|v| v.variant_id == variant_id)
            .cloned())
    }

    async fn insert_one(&self, mut variant: Variant) -> Result<InsertedVariant> {
        let mut documents = self.write()?;
        if documents.iter().any(|v| v.variant_id == variant.variant_id) {
            return Err(duplicate_key(&variant.variant_id));
        }

        let id = new_document_id();
        variant.id = Some(id.clone());
        documents.push(variant);
        Ok(InsertedVariant::new(id))
    }

    async fn replace_one(
        &self,
        variant_id: &str,
        mut variant: Variant,
        upsert: bool,
    ) -> Result<ReplaceOutcome> {
        let mut documents = self.write()?;

        if variant.variant_id != variant_id
            && documents.iter().any(|v| v.variant_id == variant.variant_id)
        {
            return Err(duplicate_key(&variant.variant_id));
        }

        match documents.iter_mut().find(|v| v.variant_id == variant_id) {
            Some(existing) => {
                variant.id = existing.id.clone();
                let modified = *existing != variant;
                *existing = variant;
                Ok(ReplaceOutcome::replaced(modified))
            }
            None if upsert => {
                let id = new_document_id();
                variant.id = Some(id.clone());
                documents.push(variant);
                Ok(ReplaceOutcome::upserted(id))
            }
            None => Ok(ReplaceOutcome::default()),
        }
    }

    async fn update_one(&self, variant_id: &str, patch: VariantPatch) -> Result<u64> {
        let mut documents = self.write()?;

        if let Some(serde_json::Value::String(new_id)) = patch.fields().get(VARIANT_ID_FIELD) {
            if new_id != variant_id && documents.iter().any(|v| &v.variant_id == new_id) {
                return Err(duplicate_key(new_id));
            }
        }

        match documents.iter_mut().find(|v| v.variant_id == variant_id) {
            Some(existing) => {
                existing.apply_patch(&patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, variant_id: &str) -> Result<u64> {
        let mut documents = self.write()?;
        match documents.iter().position(|v| v.variant_id == variant_id) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn health_check(&self) -> Result<()> {
        self.read().map(|_| ())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use variants_application::ports::registry::{
    VariantStoreProviderConfig, VariantStoreProviderEntry, VARIANT_STORE_PROVIDERS,
};

#[linkme::distributed_slice(VARIANT_STORE_PROVIDERS)]
static MEMORY_PROVIDER: VariantStoreProviderEntry = VariantStoreProviderEntry {
    name: "memory",
    description: "Process-local variant collection, lost on restart",
    factory: |_config: &VariantStoreProviderConfig| Ok(Arc::new(InMemoryVariantStore::new())),
};
