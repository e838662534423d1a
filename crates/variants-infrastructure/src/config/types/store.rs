//! Document store configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use variants_domain::constants::VARIANTS_COLLECTION;

/// Variant store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered provider name (`mongodb`, `memory`)
    pub provider: String,

    /// Connection URI
    pub uri: Option<String>,

    /// Database name
    pub database: String,

    /// Collection name
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            uri: Some(DEFAULT_MONGODB_URI.to_string()),
            database: DEFAULT_STORE_DATABASE.to_string(),
            collection: VARIANTS_COLLECTION.to_string(),
        }
    }
}
