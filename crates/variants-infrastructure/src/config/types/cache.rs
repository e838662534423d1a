//! Cache configuration types

use std::time::Duration;

use crate::constants::*;
use serde::{Deserialize, Serialize};
use variants_application::use_cases::{CacheWritePolicy, ReadPathOptions};

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Registered provider name (`redis`, `moka`, `null`)
    pub provider: String,

    /// Connection URI (Redis)
    pub uri: Option<String>,

    /// Maximum entries (Moka)
    pub max_entries: u64,

    /// Lifetime of the cached listing in seconds, 0 keeps it until evicted
    pub ttl_secs: u64,

    /// Upper bound on a single cache call in milliseconds
    pub operation_timeout_ms: u64,

    /// Effect of successful mutations on the cached listing
    pub write_policy: CacheWritePolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            uri: Some(DEFAULT_REDIS_URI.to_string()),
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            ttl_secs: 0,
            operation_timeout_ms: CACHE_DEFAULT_OPERATION_TIMEOUT_MS,
            write_policy: CacheWritePolicy::default(),
        }
    }
}

impl CacheConfig {
    /// Cache call timeout as a duration
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }

    /// Read path options derived from this section
    pub fn read_path_options(&self) -> ReadPathOptions {
        ReadPathOptions::default()
            .with_cache_timeout(self.operation_timeout())
            .with_ttl_secs(self.ttl_secs)
    }
}
