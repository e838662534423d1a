//! Variant document
//!
//! A coronavirus variant record. Only `variant_id` and `name` are known to
//! the service; every other field supplied by a client is carried through
//! untouched in [`Variant::extra`].

use crate::constants::{DOCUMENT_ID_FIELD, VARIANT_ID_FIELD, VARIANT_NAME_FIELD};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// A variant record as stored in the document store and cached snapshot
///
/// Decoding never fails on an object: a missing or non-string `variant_id`
/// or `name` leaves the typed member empty and the raw value in
/// [`Variant::extra`]. Client documents go through [`Variant::from_document`],
/// which validates the typed members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(from = "Map<String, Value>")]
pub struct Variant {
    /// Store-assigned identity, when the store provides one
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Business key (e.g. `B.1.1.7`)
    #[validate(length(min = 1, message = "variant_id must not be empty"))]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub variant_id: String,

    /// Human readable name (e.g. `UK variant`)
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Client supplied fields the service does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Variant {
    fn from(mut fields: Map<String, Value>) -> Self {
        let id = take_string(&mut fields, DOCUMENT_ID_FIELD);
        let variant_id = take_string(&mut fields, VARIANT_ID_FIELD).unwrap_or_default();
        let name = take_string(&mut fields, VARIANT_NAME_FIELD).unwrap_or_default();
        Self {
            id,
            variant_id,
            name,
            extra: fields,
        }
    }
}

/// Remove `key` when it holds a string; any other value stays in place
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(fields.get(key), Some(Value::String(_))) {
        return None;
    }
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

impl Variant {
    /// Create a variant with no store identity and no extra fields
    pub fn new(variant_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            variant_id: variant_id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Set the store identity
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Parse and validate a client supplied document for creation
    pub fn from_document(document: Value) -> Result<Self> {
        if !document.is_object() {
            return Err(Error::invalid_argument(
                "variant document must be a JSON object",
            ));
        }
        let variant: Self = serde_json::from_value(document)
            .map_err(|e| Error::invalid_argument(format!("invalid variant document: {e}")))?;
        variant.validate()?;
        Ok(variant)
    }

    /// Parse and validate a full replacement document for `variant_id`
    ///
    /// A document without `variant_id` takes the one from the request path.
    /// A document naming a different `variant_id` is rejected.
    pub fn for_replacement(variant_id: &str, document: Value) -> Result<Self> {
        let Value::Object(mut fields) = document else {
            return Err(Error::invalid_argument(
                "variant document must be a JSON object",
            ));
        };

        match fields.get(VARIANT_ID_FIELD) {
            None => {
                fields.insert(
                    VARIANT_ID_FIELD.to_string(),
                    Value::String(variant_id.to_string()),
                );
            }
            Some(Value::String(body_id)) if body_id == variant_id => {}
            Some(other) => {
                return Err(Error::invalid_argument(format!(
                    "variant_id in body ({other}) does not match path ({variant_id})"
                )));
            }
        }

        Self::from_document(Value::Object(fields))
    }

    /// Merge patch fields into this document
    ///
    /// Known fields update the typed members, everything else lands in
    /// [`Variant::extra`], overwriting any previous value.
    pub fn apply_patch(&mut self, patch: &VariantPatch) {
        for (key, value) in patch.fields() {
            match (key.as_str(), value) {
                (VARIANT_ID_FIELD, Value::String(id)) => {
                    self.extra.remove(VARIANT_ID_FIELD);
                    self.variant_id = id.clone();
                }
                (VARIANT_NAME_FIELD, Value::String(name)) => {
                    self.extra.remove(VARIANT_NAME_FIELD);
                    self.name = name.clone();
                }
                _ => {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// A validated set of fields for a partial update
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct VariantPatch(Map<String, Value>);

impl VariantPatch {
    /// Validate a client supplied partial document
    pub fn from_document(document: Value) -> Result<Self> {
        let Value::Object(fields) = document else {
            return Err(Error::invalid_argument(
                "patch document must be a JSON object",
            ));
        };

        if fields.contains_key(DOCUMENT_ID_FIELD) {
            return Err(Error::invalid_argument("the _id field cannot be patched"));
        }

        for key in [VARIANT_ID_FIELD, VARIANT_NAME_FIELD] {
            match fields.get(key) {
                None => {}
                Some(Value::String(s)) if !s.is_empty() => {}
                Some(_) => {
                    return Err(Error::invalid_argument(format!(
                        "{key} must be a non-empty string"
                    )));
                }
            }
        }

        Ok(Self(fields))
    }

    /// The fields to merge
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Whether the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
