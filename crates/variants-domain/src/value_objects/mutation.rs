//! Write path value objects

use serde::{Deserialize, Serialize};

/// Identity of a newly inserted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedVariant {
    /// Identity assigned by the store
    pub inserted_id: String,
    /// Whether the store acknowledged the write
    pub acknowledged: bool,
}

impl InsertedVariant {
    /// Acknowledged insert with the given identity
    pub fn new(inserted_id: impl Into<String>) -> Self {
        Self {
            inserted_id: inserted_id.into(),
            acknowledged: true,
        }
    }
}

/// Outcome of a full-document replacement with upsert
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutcome {
    /// Documents matching the filter
    pub matched_count: u64,
    /// Documents actually changed
    pub modified_count: u64,
    /// Identity of the document created when nothing matched
    pub upserted_id: Option<String>,
}

impl ReplaceOutcome {
    /// An existing document was overwritten
    pub fn replaced(modified: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_id: None,
        }
    }

    /// No document matched, one was created
    pub fn upserted(id: impl Into<String>) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id.into()),
        }
    }

    /// Whether the replacement created a new document
    pub fn was_upsert(&self) -> bool {
        self.upserted_id.is_some()
    }
}

/// Outcome of a targeted update or delete
///
/// A missing target is not an error: the request succeeds with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    /// A document matched and the change was applied
    Applied,
    /// No document matched the `variant_id`
    NotFound,
}

impl MutationOutcome {
    /// Build from the matched/deleted count reported by the store
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }

    /// Whether a document was changed
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
