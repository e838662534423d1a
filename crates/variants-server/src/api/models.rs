//! Response bodies

use serde::{Deserialize, Serialize};
use variants_domain::entities::Variant;
use variants_domain::value_objects::{
    InsertedVariant, ListProvenance, MutationOutcome, ReplaceOutcome, VariantListing,
};

use crate::constants::{RESULT_SUCCESS, RESULT_WARNING};

/// `GET /variants` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Every variant, in store order
    pub results: Vec<Variant>,
    /// How the listing was produced
    pub cache_report: ListProvenance,
}

impl From<VariantListing> for ListResponse {
    fn from(listing: VariantListing) -> Self {
        Self {
            results: listing.records,
            cache_report: listing.provenance,
        }
    }
}

/// `POST /variants` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertedResponse {
    /// Always `success`
    pub result: String,
    /// Identity of the new document
    #[serde(rename = "insertedDoc")]
    pub inserted_doc: InsertedVariant,
}

impl From<InsertedVariant> for InsertedResponse {
    fn from(inserted_doc: InsertedVariant) -> Self {
        Self {
            result: RESULT_SUCCESS.to_string(),
            inserted_doc,
        }
    }
}

/// `PUT /variants/<variant_id>` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacedResponse {
    /// Always `success`
    pub result: String,
    /// Match and upsert counts reported by the store
    #[serde(rename = "replacedDoc")]
    pub replaced_doc: ReplaceOutcome,
}

impl From<ReplaceOutcome> for ReplacedResponse {
    fn from(replaced_doc: ReplaceOutcome) -> Self {
        Self {
            result: RESULT_SUCCESS.to_string(),
            replaced_doc,
        }
    }
}

/// Body of mutations whose target may be missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// `success` or `warning`
    pub result: String,
    /// Human readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Successful outcome
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            result: RESULT_SUCCESS.to_string(),
            message: message.into(),
        }
    }

    /// Outcome with nothing to act on
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            result: RESULT_WARNING.to_string(),
            message: message.into(),
        }
    }

    /// `PATCH /variants/<variant_id>` body
    pub fn patched(variant_id: &str, outcome: MutationOutcome) -> Self {
        match outcome {
            MutationOutcome::Applied => {
                Self::success(format!("The variant {variant_id} has been updated"))
            }
            MutationOutcome::NotFound => Self::warning(format!(
                "Patch (update) operation could not be applied. The variant {variant_id} was not found in the collection."
            )),
        }
    }

    /// `DELETE /variants/<variant_id>` body
    pub fn deleted(variant_id: &str, outcome: MutationOutcome) -> Self {
        match outcome {
            MutationOutcome::Applied => {
                Self::success(format!("The variant {variant_id} has been deleted"))
            }
            MutationOutcome::NotFound => Self::warning(format!(
                "Delete operation could not be applied. The variant {variant_id} was not found in the collection."
            )),
        }
    }
}

/// Acknowledgement returned by the sequence stubs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceAck {
    /// `OK <method>`
    pub ok: String,
}

impl SequenceAck {
    /// Acknowledge the given HTTP method
    pub fn for_method(method: &str) -> Self {
        Self {
            ok: format!("OK {method}"),
        }
    }
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description
    pub error: String,
}

impl ErrorResponse {
    /// Wrap a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
