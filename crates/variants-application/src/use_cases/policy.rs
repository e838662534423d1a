//! Cache coordination policies

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use variants_domain::error::{Error, Result};
use variants_domain::ports::providers::cache::CacheEntryConfig;

/// Default bound on a single cache call
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_millis(500);

/// What a successful mutation does to the cached listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheWritePolicy {
    /// Leave the cached listing untouched until it is overwritten or evicted
    #[default]
    LeaveStale,
    /// Delete the cached listing after every mutation that changed the store
    Invalidate,
}

impl CacheWritePolicy {
    /// Configuration spelling of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeaveStale => "leave_stale",
            Self::Invalidate => "invalidate",
        }
    }

    /// Whether mutations evict the cached listing
    pub fn invalidates(&self) -> bool {
        matches!(self, Self::Invalidate)
    }
}

impl fmt::Display for CacheWritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheWritePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "leave_stale" => Ok(Self::LeaveStale),
            "invalidate" => Ok(Self::Invalidate),
            other => Err(Error::configuration(format!(
                "Unknown cache write policy '{other}'. Expected 'leave_stale' or 'invalidate'"
            ))),
        }
    }
}

/// Tuning knobs for the cache-aside read path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPathOptions {
    /// Upper bound on each cache call; elapsing counts as a cache failure
    pub cache_timeout: Duration,
    /// Entry settings used when repopulating the listing
    pub entry: CacheEntryConfig,
}

impl Default for ReadPathOptions {
    fn default() -> Self {
        Self {
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            entry: CacheEntryConfig::persistent(),
        }
    }
}

impl ReadPathOptions {
    /// Set the cache call timeout
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self
    }

    /// Set the listing TTL in seconds, zero meaning no expiry
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.entry = self.entry.with_ttl_secs(secs);
        self
    }
}

/// Run a cache call under the configured timeout
pub(crate) async fn bounded<T, F>(timeout: Duration, operation: &str, call: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::cache(format!(
            "cache {operation} timed out after {}ms",
            timeout.as_millis()
        ))),
    }
}
