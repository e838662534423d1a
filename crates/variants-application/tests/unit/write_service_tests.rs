//! Tests for the write path and the cache write policy

use std::sync::Arc;

use serde_json::json;
use variants_application::domain_services::{
    VariantReadServiceInterface, VariantWriteServiceInterface,
};
use variants_application::use_cases::{
    CacheWritePolicy, VariantReadServiceImpl, VariantWriteServiceImpl,
};
use variants_domain::constants::ALL_VARIANTS_CACHE_KEY;
use variants_domain::value_objects::{ListProvenance, MutationOutcome};
use variants_domain::ports::providers::VariantStoreProvider;

use crate::test_doubles::{ids, sa_variant, uk_variant, CountingStore, FlakyCache};

fn services(
    cache: &Arc<FlakyCache>,
    store: &Arc<CountingStore>,
    policy: CacheWritePolicy,
) -> (VariantReadServiceImpl, VariantWriteServiceImpl) {
    (
        VariantReadServiceImpl::new(cache.clone(), store.clone()),
        VariantWriteServiceImpl::with_policy(store.clone(), cache.clone(), policy),
    )
}

#[tokio::test]
async fn test_create_inserts_into_store() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(Vec::new());
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let inserted = writer
        .create(json!({"variant_id": "P.1", "name": "Brazil variant", "lineage": "B.1.1.28"}))
        .await
        .expect("create");

    assert!(inserted.acknowledged);
    assert!(!inserted.inserted_id.is_empty());

    let stored = store
        .find_one("P.1")
        .await
        .expect("lookup")
        .expect("created variant present");
    assert_eq!(stored.name, "Brazil variant");
    assert_eq!(stored.extra.get("lineage"), Some(&json!("B.1.1.28")));
}

#[tokio::test]
async fn test_create_rejects_invalid_documents_before_store() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(Vec::new());
    store.set_fail(true);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let err = writer
        .create(json!({"name": "no id"}))
        .await
        .expect_err("missing variant_id");
    assert!(err.is_client_error());

    let err = writer.create(json!(["not", "an", "object"])).await.expect_err("array body");
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_create_duplicate_variant_id_is_rejected() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let err = writer
        .create(json!({"variant_id": "B.1.1.7", "name": "duplicate"}))
        .await
        .expect_err("duplicate");
    assert!(err.is_store_error());
}

#[tokio::test]
async fn test_store_failure_is_fatal_for_writes() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant()]);
    store.set_fail(true);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let body = json!({"variant_id": "P.1", "name": "Brazil variant"});
    assert!(writer.create(body.clone()).await.is_err());
    assert!(writer.replace("P.1", body).await.is_err());
    assert!(writer
        .patch_fields("B.1.1.7", json!({"name": "x"}))
        .await
        .is_err());
    assert!(writer.delete("B.1.1.7").await.is_err());
}

#[tokio::test]
async fn test_replace_upserts_missing_document() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(Vec::new());
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let outcome = writer
        .replace("B.1.617.2", json!({"name": "Delta"}))
        .await
        .expect("upsert");

    assert!(outcome.was_upsert());
    assert_eq!(outcome.matched_count, 0);
    let stored = store.find_one("B.1.617.2").await.expect("lookup");
    assert_eq!(stored.map(|v| v.name), Some("Delta".to_string()));
}

#[tokio::test]
async fn test_replace_overwrites_whole_document() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![
        uk_variant().with_field("who_label", json!("Alpha"))
    ]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let outcome = writer
        .replace("B.1.1.7", json!({"variant_id": "B.1.1.7", "name": "Alpha"}))
        .await
        .expect("replace");

    assert_eq!(outcome.matched_count, 1);
    assert!(!outcome.was_upsert());
    let stored = store
        .find_one("B.1.1.7")
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(stored.name, "Alpha");
    assert!(stored.extra.get("who_label").is_none());
}

#[tokio::test]
async fn test_replace_rejects_mismatched_variant_id() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(Vec::new());
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let err = writer
        .replace("B.1.1.7", json!({"variant_id": "P.1", "name": "x"}))
        .await
        .expect_err("mismatch");
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_patch_merges_only_supplied_fields() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![
        uk_variant().with_field("who_label", json!("Alpha"))
    ]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let outcome = writer
        .patch_fields("B.1.1.7", json!({"name": "Alpha variant"}))
        .await
        .expect("patch");

    assert_eq!(outcome, MutationOutcome::Applied);
    let stored = store
        .find_one("B.1.1.7")
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(stored.name, "Alpha variant");
    assert_eq!(stored.extra.get("who_label"), Some(&json!("Alpha")));
}

#[tokio::test]
async fn test_patch_missing_variant_is_not_found_warning() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(Vec::new());
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let outcome = writer
        .patch_fields("X.9", json!({"name": "ghost"}))
        .await
        .expect("patch on missing id is not an error");
    assert_eq!(outcome, MutationOutcome::NotFound);
}

#[tokio::test]
async fn test_patch_rejects_identity_field() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let err = writer
        .patch_fields("B.1.1.7", json!({"_id": "abc"}))
        .await
        .expect_err("_id is immutable");
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_delete_missing_variant_is_not_found_warning() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    assert_eq!(
        writer.delete("B.1.1.7").await.expect("delete"),
        MutationOutcome::Applied
    );
    assert_eq!(
        writer.delete("B.1.1.7").await.expect("second delete"),
        MutationOutcome::NotFound
    );
}

#[tokio::test]
async fn test_leave_stale_keeps_snapshot_after_every_mutation() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant(), sa_variant()]);
    let (reader, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    let before = reader.list_all().await.expect("warm cache");

    writer
        .create(json!({"variant_id": "P.1", "name": "Brazil variant"}))
        .await
        .expect("create");
    writer
        .replace("B.1.351", json!({"name": "Beta"}))
        .await
        .expect("replace");
    writer
        .patch_fields("B.1.1.7", json!({"name": "Alpha"}))
        .await
        .expect("patch");
    writer.delete("B.1.351").await.expect("delete");

    let after = reader.list_all().await.expect("stale listing");
    assert_eq!(after.provenance, ListProvenance::CacheHit);
    assert_eq!(after.records, before.records);
    assert_eq!(store.scan_count(), 1);
}

#[tokio::test]
async fn test_leave_stale_never_calls_cache_on_write() {
    let cache = FlakyCache::new();
    cache.set_fail_get(true);
    cache.set_fail_set(true);
    cache.set_fail_delete(true);
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::LeaveStale);

    writer
        .create(json!({"variant_id": "P.1", "name": "Brazil variant"}))
        .await
        .expect("cache state is irrelevant to writes");
    writer.delete("B.1.1.7").await.expect("delete");
}

#[tokio::test]
async fn test_invalidate_policy_makes_next_read_reflect_mutation() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (reader, writer) = services(&cache, &store, CacheWritePolicy::Invalidate);

    reader.list_all().await.expect("warm cache");
    writer.delete("B.1.1.7").await.expect("delete");

    assert!(cache.raw_get(ALL_VARIANTS_CACHE_KEY).await.is_none());
    let listing = reader.list_all().await.expect("listing");
    assert_eq!(listing.provenance, ListProvenance::CacheMissStoreOk);
    assert!(listing.records.is_empty());
}

#[tokio::test]
async fn test_invalidate_policy_skips_unmatched_mutations() {
    let cache = FlakyCache::new();
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (reader, writer) = services(&cache, &store, CacheWritePolicy::Invalidate);

    reader.list_all().await.expect("warm cache");
    writer.delete("X.9").await.expect("delete of missing id");

    let listing = reader.list_all().await.expect("listing");
    assert_eq!(listing.provenance, ListProvenance::CacheHit);
    assert_eq!(ids(&listing.records), vec!["B.1.1.7"]);
}

#[tokio::test]
async fn test_invalidate_failure_does_not_fail_write() {
    let cache = FlakyCache::new();
    cache.set_fail_delete(true);
    let store = CountingStore::with_variants(vec![uk_variant()]);
    let (_, writer) = services(&cache, &store, CacheWritePolicy::Invalidate);

    let outcome = writer.delete("B.1.1.7").await.expect("write succeeds");
    assert!(outcome.is_applied());
    assert!(store.find_one("B.1.1.7").await.expect("lookup").is_none());
}
