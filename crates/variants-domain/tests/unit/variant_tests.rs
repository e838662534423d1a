//! Unit tests for the variant document and patch validation

use serde_json::json;
use variants_domain::entities::{Variant, VariantPatch};
use variants_domain::Error;

#[test]
fn test_from_document_accepts_minimal_variant() {
    let variant = Variant::from_document(json!({"variant_id": "B.1.1.7", "name": "UK variant"}))
        .expect("valid document");

    assert_eq!(variant, Variant::new("B.1.1.7", "UK variant"));
}

#[test]
fn test_from_document_rejects_missing_name() {
    let result = Variant::from_document(json!({"variant_id": "B.1.1.7"}));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_from_document_rejects_non_string_name() {
    let result = Variant::from_document(json!({"variant_id": "B.1.1.7", "name": 7}));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_from_document_rejects_empty_variant_id() {
    let result = Variant::from_document(json!({"variant_id": "", "name": "UK variant"}));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_from_document_rejects_non_object() {
    let result = Variant::from_document(json!(["B.1.1.7"]));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_from_document_keeps_store_identity() {
    let variant = Variant::from_document(
        json!({"_id": "abc123", "variant_id": "B.1.1.7", "name": "UK variant"}),
    )
    .expect("valid document");

    assert_eq!(variant.id.as_deref(), Some("abc123"));
    assert!(variant.extra.is_empty());
}

#[test]
fn test_replacement_rejects_mismatched_id() {
    let result = Variant::for_replacement(
        "B.1.1.7",
        json!({"variant_id": "P.1", "name": "Brazil variant"}),
    );
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_replacement_accepts_matching_id() {
    let variant = Variant::for_replacement(
        "B.1.1.7",
        json!({"variant_id": "B.1.1.7", "name": "Alpha"}),
    )
    .expect("valid replacement");
    assert_eq!(variant.name, "Alpha");
}

#[test]
fn test_patch_rejects_identity_field() {
    let result = VariantPatch::from_document(json!({"_id": "x"}));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_patch_rejects_non_string_name() {
    let result = VariantPatch::from_document(json!({"name": 42}));
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn test_apply_patch_merges_fields() {
    let mut variant = Variant::new("B.1.1.7", "UK variant").with_field("who_label", json!("?"));
    let patch = VariantPatch::from_document(json!({"name": "Alpha", "who_label": "Alpha"}))
        .expect("valid patch");

    variant.apply_patch(&patch);

    assert_eq!(variant.variant_id, "B.1.1.7");
    assert_eq!(variant.name, "Alpha");
    assert_eq!(variant.extra.get("who_label"), Some(&json!("Alpha")));
}
