//! MongoDB Variant Store Tests
//!
//! Require a MongoDB server on 127.0.0.1:27017. Each test works in its own
//! uniquely named collection.

use serde_json::json;
use variants_domain::entities::{Variant, VariantPatch};
use variants_domain::ports::providers::VariantStoreProvider;
use variants_providers::store::MongoVariantStore;

use crate::helpers::is_mongodb_available;

fn store(test: &str) -> MongoVariantStore {
    let collection = format!("variants-test-{test}-{}", unique_suffix());
    MongoVariantStore::new("mongodb://127.0.0.1:27017", "variants_test", collection)
        .expect("valid uri")
}

fn unique_suffix() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos().to_string())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_mongodb_crud_cycle() {
    skip_if_service_unavailable!("MongoDB", is_mongodb_available());

    let store = store("crud");
    store.health_check().await.expect("ping");

    let inserted = store
        .insert_one(Variant::new("B.1.1.7", "UK variant"))
        .await
        .expect("insert");
    assert!(inserted.acknowledged);

    let all = store.find_all().await.expect("scan");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id.as_deref(), Some(inserted.inserted_id.as_str()));

    let patch = VariantPatch::from_document(json!({"who_label": "Alpha"})).expect("patch");
    assert_eq!(store.update_one("B.1.1.7", patch).await.expect("update"), 1);

    let upsert = store
        .replace_one("P.1", Variant::new("P.1", "Brazil variant"), true)
        .await
        .expect("upsert");
    assert!(upsert.was_upsert());

    assert_eq!(store.delete_one("B.1.1.7").await.expect("delete"), 1);
    assert_eq!(store.delete_one("B.1.1.7").await.expect("delete"), 0);
    store.close().await.expect("close");
}

#[tokio::test]
async fn test_mongodb_unique_variant_id() {
    skip_if_service_unavailable!("MongoDB", is_mongodb_available());

    let store = store("unique");
    store
        .insert_one(Variant::new("B.1.1.7", "UK variant"))
        .await
        .expect("insert");

    let err = store
        .insert_one(Variant::new("B.1.1.7", "duplicate"))
        .await
        .expect_err("unique index");
    assert!(err.is_store_error());
    store.close().await.expect("close");
}
