//! Health checks
//!
//! Probes the document store and the cache and aggregates the results.
//! A failing store takes the service down; a failing cache only degrades
//! it, since reads fall back to the store.

use crate::constants::{HEALTH_CHECK_CACHE, HEALTH_CHECK_STORE, HEALTH_CHECK_TIMEOUT_MS};
use crate::logging::log_health_check;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use variants_domain::error::Result;
use variants_domain::ports::{CacheProvider, VariantStoreProvider};

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Fully operational
    Up,
    /// Operational with reduced guarantees
    Degraded,
    /// Not operational
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Check if the service is operational (healthy or degraded)
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Up | Self::Degraded)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the health check
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Error message when not up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self::with_status(name, HealthStatus::Up, None)
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Down, error)
    }

    /// Create a degraded health check
    pub fn degraded<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Degraded, error)
    }

    fn with_status<S: Into<String>>(name: S, status: HealthStatus, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error,
            details: None,
        }
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = duration.as_millis() as u64;
        self
    }

    /// Set additional details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, the worst of the individual checks
    pub status: HealthStatus,
    /// Timestamp of the health check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Total response time in milliseconds
    pub response_time_ms: u64,
    /// Service version
    pub version: String,
    /// Individual health check results
    pub checks: BTreeMap<String, HealthCheck>,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthResponse {
    /// Create a new health response
    pub fn new() -> Self {
        Self {
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks: BTreeMap::new(),
        }
    }

    /// Add a health check result
    pub fn add_check(mut self, check: HealthCheck) -> Self {
        if check.status == HealthStatus::Down {
            self.status = HealthStatus::Down;
        } else if check.status == HealthStatus::Degraded && self.status == HealthStatus::Up {
            self.status = HealthStatus::Degraded;
        }

        self.checks.insert(check.name.clone(), check);
        self
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = duration.as_millis() as u64;
        self
    }

    /// Check if the overall system is healthy
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }
}

/// Health check function trait
///
/// # Example
///
/// ```no_run
/// use variants_infrastructure::health::{HealthChecker, HealthCheck};
/// use async_trait::async_trait;
///
/// struct AlwaysUp;
///
/// #[async_trait]
/// impl HealthChecker for AlwaysUp {
///     fn name(&self) -> &str {
///         "always-up"
///     }
///
///     async fn check_health(&self) -> HealthCheck {
///         HealthCheck::healthy(self.name())
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait HealthChecker: Send + Sync {
    /// Name the check is reported under
    fn name(&self) -> &str;

    /// Perform a health check
    async fn check_health(&self) -> HealthCheck;
}

/// Ordered set of health checkers run on every probe
#[derive(Clone, Default)]
pub struct HealthRegistry {
    checkers: Vec<Arc<dyn HealthChecker>>,
}

impl HealthRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry probing the given store and cache
    pub fn for_providers(
        store: Arc<dyn VariantStoreProvider>,
        cache: Arc<dyn CacheProvider>,
    ) -> Self {
        Self::new()
            .with_checker(checkers::StoreHealthChecker::new(store))
            .with_checker(checkers::CacheHealthChecker::new(cache))
    }

    /// Register a health checker
    pub fn with_checker<C>(mut self, checker: C) -> Self
    where
        C: HealthChecker + 'static,
    {
        self.checkers.push(Arc::new(checker));
        self
    }

    /// Perform all registered health checks
    pub async fn perform_health_checks(&self) -> HealthResponse {
        let start_time = Instant::now();
        let mut response = HealthResponse::new();

        for checker in &self.checkers {
            let check = checker.check_health().await;
            log_health_check(&check);
            response = response.add_check(check);
        }

        response.with_response_time(start_time.elapsed())
    }

    /// Names of the registered checks
    pub fn list_checks(&self) -> Vec<String> {
        self.checkers.iter().map(|c| c.name().to_string()).collect()
    }
}

impl std::fmt::Debug for HealthRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthRegistry")
            .field("checks", &self.list_checks())
            .finish()
    }
}

/// Run a probe under the health check deadline
async fn probe<F>(timeout: Duration, future: F) -> std::result::Result<(), String>
where
    F: std::future::Future<Output = Result<()>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!("timed out after {}ms", timeout.as_millis())),
    }
}

/// Built-in health checkers
pub mod checkers {
    use super::*;

    /// Document store connectivity, reports `down` on failure
    pub struct StoreHealthChecker {
        store: Arc<dyn VariantStoreProvider>,
        timeout: Duration,
    }

    impl StoreHealthChecker {
        /// Checker with the default deadline
        pub fn new(store: Arc<dyn VariantStoreProvider>) -> Self {
            Self {
                store,
                timeout: Duration::from_millis(HEALTH_CHECK_TIMEOUT_MS),
            }
        }

        /// Override the probe deadline
        pub fn with_timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }
    }

    #[async_trait::async_trait]
    impl HealthChecker for StoreHealthChecker {
        fn name(&self) -> &str {
            HEALTH_CHECK_STORE
        }

        async fn check_health(&self) -> HealthCheck {
            let start_time = Instant::now();
            let check = match probe(self.timeout, self.store.health_check()).await {
                Ok(()) => HealthCheck::healthy(HEALTH_CHECK_STORE),
                Err(e) => HealthCheck::failed(HEALTH_CHECK_STORE, Some(e)),
            };
            check
                .with_response_time(start_time.elapsed())
                .with_details(serde_json::json!({ "provider": self.store.provider_name() }))
        }
    }

    /// Cache connectivity, reports `degraded` on failure
    pub struct CacheHealthChecker {
        cache: Arc<dyn CacheProvider>,
        timeout: Duration,
    }

    impl CacheHealthChecker {
        /// Checker with the default deadline
        pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
            Self {
                cache,
                timeout: Duration::from_millis(HEALTH_CHECK_TIMEOUT_MS),
            }
        }

        /// Override the probe deadline
        pub fn with_timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }
    }

    #[async_trait::async_trait]
    impl HealthChecker for CacheHealthChecker {
        fn name(&self) -> &str {
            HEALTH_CHECK_CACHE
        }

        async fn check_health(&self) -> HealthCheck {
            let start_time = Instant::now();
            let check = match probe(self.timeout, self.cache.health_check()).await {
                Ok(()) => HealthCheck::healthy(HEALTH_CHECK_CACHE),
                Err(e) => HealthCheck::degraded(HEALTH_CHECK_CACHE, Some(e)),
            };
            check
                .with_response_time(start_time.elapsed())
                .with_details(serde_json::json!({ "provider": self.cache.provider_name() }))
        }
    }
}
