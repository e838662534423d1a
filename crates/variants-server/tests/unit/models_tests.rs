//! Response body shape tests

use serde_json::json;
use variants_domain::entities::Variant;
use variants_domain::value_objects::{
    InsertedVariant, ListProvenance, MutationOutcome, ReplaceOutcome, VariantListing,
};
use variants_server::api::models::{
    InsertedResponse, ListResponse, MessageResponse, ReplacedResponse, SequenceAck,
};

#[test]
fn test_list_response_shape() {
    let listing = VariantListing::new(
        vec![Variant::new("B.1.1.7", "UK variant")],
        ListProvenance::CacheHit,
    );

    let json = serde_json::to_value(ListResponse::from(listing)).unwrap();

    assert_eq!(
        json,
        json!({
            "results": [{"variant_id": "B.1.1.7", "name": "UK variant"}],
            "cache_report": "hit"
        })
    );
}

#[test]
fn test_inserted_response_shape() {
    let json = serde_json::to_value(InsertedResponse::from(InsertedVariant::new("abc"))).unwrap();

    assert_eq!(
        json,
        json!({
            "result": "success",
            "insertedDoc": {"insertedId": "abc", "acknowledged": true}
        })
    );
}

#[test]
fn test_replaced_response_shape() {
    let json = serde_json::to_value(ReplacedResponse::from(ReplaceOutcome::replaced(true))).unwrap();

    assert_eq!(json["result"], "success");
    assert_eq!(json["replacedDoc"]["matchedCount"], 1);
    assert_eq!(json["replacedDoc"]["modifiedCount"], 1);
    assert!(json["replacedDoc"]["upsertedId"].is_null());
}

#[test]
fn test_mutation_messages() {
    assert_eq!(
        MessageResponse::patched("B.1.1.7", MutationOutcome::Applied),
        MessageResponse::success("The variant B.1.1.7 has been updated")
    );
    assert_eq!(
        MessageResponse::deleted("B.1.1.7", MutationOutcome::Applied),
        MessageResponse::success("The variant B.1.1.7 has been deleted")
    );

    let warning = MessageResponse::patched("P.1", MutationOutcome::NotFound);
    assert_eq!(warning.result, "warning");
    assert_eq!(
        warning.message,
        "Patch (update) operation could not be applied. The variant P.1 was not found in the collection."
    );

    let warning = MessageResponse::deleted("P.1", MutationOutcome::NotFound);
    assert_eq!(
        warning.message,
        "Delete operation could not be applied. The variant P.1 was not found in the collection."
    );
}

#[test]
fn test_sequence_ack() {
    assert_eq!(
        serde_json::to_value(SequenceAck::for_method("put")).unwrap(),
        json!({"ok": "OK put"})
    );
}
