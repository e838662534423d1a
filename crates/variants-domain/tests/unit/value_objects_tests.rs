//! Unit tests for read and write value objects

use variants_domain::value_objects::{
    InsertedVariant, ListProvenance, MutationOutcome, ReplaceOutcome,
};

#[test]
fn test_provenance_report_codes() {
    assert_eq!(ListProvenance::CacheHit.as_report(), "hit");
    assert_eq!(ListProvenance::CacheMissStoreOk.as_report(), "miss-repopulated");
    assert_eq!(
        ListProvenance::CacheErrorStoreOk.as_report(),
        "cache-unavailable"
    );
}

#[test]
fn test_provenance_serializes_as_report_code() {
    let json = serde_json::to_string(&ListProvenance::CacheMissStoreOk).expect("serializable");
    assert_eq!(json, "\"miss-repopulated\"");
    assert_eq!(ListProvenance::CacheHit.to_string(), "hit");
}

#[test]
fn test_mutation_outcome_from_count() {
    assert_eq!(MutationOutcome::from_count(0), MutationOutcome::NotFound);
    assert_eq!(MutationOutcome::from_count(1), MutationOutcome::Applied);
    assert!(MutationOutcome::Applied.is_applied());
}

#[test]
fn test_replace_outcome_camel_case() {
    let json = serde_json::to_value(ReplaceOutcome::upserted("id-1")).expect("serializable");
    assert_eq!(json["upsertedId"], "id-1");
    assert_eq!(json["matchedCount"], 0);
    assert!(ReplaceOutcome::upserted("id-1").was_upsert());
    assert!(!ReplaceOutcome::replaced(true).was_upsert());
}

#[test]
fn test_inserted_variant_is_acknowledged() {
    let inserted = InsertedVariant::new("abc");
    let json = serde_json::to_value(&inserted).expect("serializable");
    assert_eq!(json["insertedId"], "abc");
    assert_eq!(json["acknowledged"], true);
}
