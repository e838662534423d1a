//! Health check tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use variants_domain::entities::{Variant, VariantPatch};
use variants_domain::error::{Error, Result};
use variants_domain::ports::providers::CacheEntryConfig;
use variants_domain::ports::{CacheProvider, VariantStoreProvider};
use variants_domain::value_objects::{InsertedVariant, ReplaceOutcome};
use variants_infrastructure::health::checkers::{CacheHealthChecker, StoreHealthChecker};
use variants_infrastructure::health::{
    HealthCheck, HealthChecker, HealthRegistry, HealthResponse, HealthStatus,
};
use variants_providers::cache::MokaCacheProvider;
use variants_providers::store::InMemoryVariantStore;

/// Store whose every call fails
#[derive(Debug)]
struct DownStore;

#[async_trait]
impl VariantStoreProvider for DownStore {
    async fn find_all(&self) -> Result<Vec<Variant>> {
        Err(Error::database("connection refused"))
    }

    async fn find_one(&self, _variant_id: &str) -> Result<Option<Variant>> {
        Err(Error::database("connection refused"))
    }

    async fn insert_one(&self, _variant: Variant) -> Result<InsertedVariant> {
        Err(Error::database("connection refused"))
    }

    async fn replace_one(
        &self,
        _variant_id: &str,
        _variant: Variant,
        _upsert: bool,
    ) -> Result<ReplaceOutcome> {
        Err(Error::database("connection refused"))
    }

    async fn update_one(&self, _variant_id: &str, _patch: VariantPatch) -> Result<u64> {
        Err(Error::database("connection refused"))
    }

    async fn delete_one(&self, _variant_id: &str) -> Result<u64> {
        Err(Error::database("connection refused"))
    }

    async fn health_check(&self) -> Result<()> {
        Err(Error::database("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "down"
    }
}

/// Cache whose calls never complete
#[derive(Debug)]
struct HangingCache;

#[async_trait]
impl CacheProvider for HangingCache {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        std::future::pending().await
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        std::future::pending().await
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        std::future::pending().await
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        std::future::pending().await
    }

    fn provider_name(&self) -> &str {
        "hanging"
    }
}

fn moka() -> Arc<dyn CacheProvider> {
    Arc::new(MokaCacheProvider::new())
}

fn memory() -> Arc<dyn VariantStoreProvider> {
    Arc::new(InMemoryVariantStore::new())
}

#[test]
fn test_status_predicates() {
    assert!(HealthStatus::Up.is_healthy());
    assert!(!HealthStatus::Degraded.is_healthy());
    assert!(HealthStatus::Degraded.is_operational());
    assert!(!HealthStatus::Down.is_operational());
}

#[test]
fn test_response_takes_worst_status() {
    let response = HealthResponse::new()
        .add_check(HealthCheck::healthy("a"))
        .add_check(HealthCheck::degraded("b", None));
    assert_eq!(response.status, HealthStatus::Degraded);

    let response = response.add_check(HealthCheck::failed("c", Some("boom".into())));
    assert_eq!(response.status, HealthStatus::Down);

    let response = response.add_check(HealthCheck::degraded("d", None));
    assert_eq!(response.status, HealthStatus::Down);
    assert_eq!(response.checks.len(), 4);
}

#[test]
fn test_response_serializes_lowercase_status() {
    let response = HealthResponse::new().add_check(HealthCheck::healthy("store"));
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "up");
    assert_eq!(json["checks"]["store"]["status"], "up");
    assert!(json["checks"]["store"].get("error").is_none());
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_healthy_providers_report_up() {
    let registry = HealthRegistry::for_providers(memory(), moka());

    let response = registry.perform_health_checks().await;

    assert_eq!(response.status, HealthStatus::Up);
    assert_eq!(response.checks["store"].status, HealthStatus::Up);
    assert_eq!(response.checks["cache"].status, HealthStatus::Up);
    assert_eq!(response.checks["cache"].details.as_ref().unwrap()["provider"], "moka");
    assert_eq!(registry.list_checks(), vec!["store", "cache"]);
}

#[tokio::test]
async fn test_store_failure_takes_service_down() {
    let registry = HealthRegistry::for_providers(Arc::new(DownStore), moka());

    let response = registry.perform_health_checks().await;

    assert_eq!(response.status, HealthStatus::Down);
    let store = &response.checks["store"];
    assert_eq!(store.status, HealthStatus::Down);
    assert!(store.error.as_deref().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_cache_timeout_only_degrades() {
    let registry = HealthRegistry::new()
        .with_checker(StoreHealthChecker::new(memory()))
        .with_checker(
            CacheHealthChecker::new(Arc::new(HangingCache))
                .with_timeout(Duration::from_millis(20)),
        );

    let response = registry.perform_health_checks().await;

    assert_eq!(response.status, HealthStatus::Degraded);
    let cache = &response.checks["cache"];
    assert_eq!(cache.status, HealthStatus::Degraded);
    assert!(cache.error.as_deref().unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_custom_checker() {
    struct Fixed;

    #[async_trait]
    impl HealthChecker for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn check_health(&self) -> HealthCheck {
            HealthCheck::degraded(self.name(), Some("always".into()))
        }
    }

    let response = HealthRegistry::new()
        .with_checker(Fixed)
        .perform_health_checks()
        .await;

    assert_eq!(response.status, HealthStatus::Degraded);
    assert_eq!(response.checks["fixed"].error.as_deref(), Some("always"));
}
