//! Read path value objects

use crate::entities::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a full-collection listing was produced
///
/// Surfaced to API consumers as `cache_report` so they can tell a fast-path
/// response from a slow-path one. It never changes the records returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListProvenance {
    /// Served from the cached snapshot, the store was not queried
    #[serde(rename = "hit")]
    CacheHit,
    /// Cache had no entry; store read succeeded and the cache was repopulated
    #[serde(rename = "miss-repopulated")]
    CacheMissStoreOk,
    /// The cache failed on read or write; data comes straight from the store
    #[serde(rename = "cache-unavailable")]
    CacheErrorStoreOk,
}

impl ListProvenance {
    /// Short machine readable code used in API responses
    pub fn as_report(&self) -> &'static str {
        match self {
            Self::CacheHit => "hit",
            Self::CacheMissStoreOk => "miss-repopulated",
            Self::CacheErrorStoreOk => "cache-unavailable",
        }
    }
}

impl fmt::Display for ListProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_report())
    }
}

/// Result of listing the whole collection
#[derive(Debug, Clone, PartialEq)]
pub struct VariantListing {
    /// Records in store order
    pub records: Vec<Variant>,
    /// Where the records came from
    pub provenance: ListProvenance,
}

impl VariantListing {
    /// Create a listing
    pub fn new(records: Vec<Variant>, provenance: ListProvenance) -> Self {
        Self {
            records,
            provenance,
        }
    }
}
