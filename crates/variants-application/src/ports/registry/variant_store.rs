//! Variant Store Provider Registry
//!
//! Auto-registration system for document store providers.

use std::sync::Arc;

use crate::ports::providers::variant_store::VariantStoreProvider;

/// Configuration for variant store provider creation
#[derive(Debug, Clone, Default)]
pub struct VariantStoreProviderConfig {
    /// Provider name (e.g., "memory", "mongodb")
    pub provider: String,
    /// Connection URI
    pub uri: Option<String>,
    /// Database name
    pub database: Option<String>,
    /// Collection name
    pub collection: Option<String>,
}

impl VariantStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }
}

/// Registry entry for variant store providers
pub struct VariantStoreProviderEntry {
    /// Unique provider name (e.g., "memory", "mongodb")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&VariantStoreProviderConfig) -> Result<Arc<dyn VariantStoreProvider>, String>,
}

#[linkme::distributed_slice]
pub static VARIANT_STORE_PROVIDERS: [VariantStoreProviderEntry] = [..];

/// Resolve variant store provider by name from registry
pub fn resolve_variant_store_provider(
    config: &VariantStoreProviderConfig,
) -> Result<Arc<dyn VariantStoreProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = VARIANT_STORE_PROVIDERS
        .iter()
        .find(|e| e.name == provider_name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = VARIANT_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown variant store provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered variant store providers
pub fn list_variant_store_providers() -> Vec<(&'static str, &'static str)> {
    VARIANT_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
