//! End to end cache staleness walkthrough
//!
//! Under the default write policy a delete leaves the cached listing stale
//! until it is evicted.

use std::sync::Arc;

use rocket::http::Status;
use variants_application::use_cases::CacheWritePolicy;
use variants_providers::cache::MokaCacheProvider;
use variants_providers::store::InMemoryVariantStore;

use crate::test_utils::{client_for, context_with, json_body, local_config, uk_variant};

#[rocket::async_test]
async fn test_delete_leaves_listing_stale_until_evicted() {
    let client = client_for(crate::test_utils::local_context(vec![uk_variant()])).await;

    let cold = json_body(client.get("/variants").dispatch().await).await;
    assert_eq!(cold["cache_report"], "miss-repopulated");
    assert_eq!(cold["results"].as_array().unwrap().len(), 1);

    let warm = json_body(client.get("/variants").dispatch().await).await;
    assert_eq!(warm["cache_report"], "hit");

    let deleted = client.delete("/variants/B.1.1.7").dispatch().await;
    assert_eq!(deleted.status(), Status::Ok);

    let stale = json_body(client.get("/variants").dispatch().await).await;
    assert_eq!(stale["cache_report"], "hit");
    assert_eq!(stale["results"][0]["variant_id"], "B.1.1.7");

    let evicted = json_body(client.delete("/admin/cache/variants").dispatch().await).await;
    assert_eq!(evicted["result"], "success");

    let fresh = json_body(client.get("/variants").dispatch().await).await;
    assert_eq!(fresh["cache_report"], "miss-repopulated");
    assert!(fresh["results"].as_array().unwrap().is_empty());
}

#[rocket::async_test]
async fn test_invalidate_policy_reflects_delete_immediately() {
    let mut config = local_config();
    config.cache.write_policy = CacheWritePolicy::Invalidate;
    let context = context_with(
        config,
        Arc::new(MokaCacheProvider::new()),
        Arc::new(InMemoryVariantStore::with_variants(vec![uk_variant()])),
    );
    let client = client_for(context).await;

    json_body(client.get("/variants").dispatch().await).await;
    client.delete("/variants/B.1.1.7").dispatch().await;

    let after = json_body(client.get("/variants").dispatch().await).await;
    assert_eq!(after["cache_report"], "miss-repopulated");
    assert!(after["results"].as_array().unwrap().is_empty());
}
