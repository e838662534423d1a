//! Variant collection routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/variants` | GET | Whole collection through the cache-aside read path |
//! | `/variants/<variant_id>` | GET | One document, straight from the store |
//! | `/variants` | POST | Insert a document |
//! | `/variants/<variant_id>` | PUT | Replace or create a document |
//! | `/variants/<variant_id>` | PATCH | Merge fields into a document |
//! | `/variants/<variant_id>` | DELETE | Delete a document |

use std::sync::Arc;

use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, put, routes, Responder, Route, State};
use serde_json::Value;
use tracing::debug;
use variants_domain::entities::Variant;
use variants_infrastructure::di::AppContext;

use super::error::{ApiError, ApiResult};
use super::models::{InsertedResponse, ListResponse, MessageResponse, ReplacedResponse};

/// Routes mounted under `/variants`
pub fn routes() -> Vec<Route> {
    routes![
        list_variants,
        get_variant,
        create_variant,
        replace_variant,
        patch_variant,
        delete_variant
    ]
}

/// Single document lookup: the document, or an empty 200 body
#[derive(Debug, Responder)]
pub enum VariantLookup {
    /// Matching document
    Found(Json<Variant>),
    /// Nothing matched
    Absent(()),
}

/// List every variant
#[get("/")]
pub async fn list_variants(context: &State<Arc<AppContext>>) -> ApiResult<ListResponse> {
    let listing = context.read_service().list_all().await?;
    debug!(
        count = listing.records.len(),
        cache_report = listing.provenance.as_report(),
        "listed variants"
    );
    Ok(Json(listing.into()))
}

/// Fetch one variant by business key
#[get("/<variant_id>")]
pub async fn get_variant(
    context: &State<Arc<AppContext>>,
    variant_id: &str,
) -> Result<VariantLookup, ApiError> {
    let found = context.read_service().get_by_variant_id(variant_id).await?;
    Ok(found.map_or(VariantLookup::Absent(()), |variant| {
        VariantLookup::Found(Json(variant))
    }))
}

/// Insert a new variant
#[post("/", data = "<document>")]
pub async fn create_variant(
    context: &State<Arc<AppContext>>,
    document: Json<Value>,
) -> ApiResult<InsertedResponse> {
    let inserted = context
        .write_service()
        .create(document.into_inner())
        .await?;
    Ok(Json(inserted.into()))
}

/// Replace a variant, creating it when absent
#[put("/<variant_id>", data = "<document>")]
pub async fn replace_variant(
    context: &State<Arc<AppContext>>,
    variant_id: &str,
    document: Json<Value>,
) -> ApiResult<ReplacedResponse> {
    let outcome = context
        .write_service()
        .replace(variant_id, document.into_inner())
        .await?;
    Ok(Json(outcome.into()))
}

/// Merge the supplied fields into a variant
#[patch("/<variant_id>", data = "<fields>")]
pub async fn patch_variant(
    context: &State<Arc<AppContext>>,
    variant_id: &str,
    fields: Json<Value>,
) -> ApiResult<MessageResponse> {
    let outcome = context
        .write_service()
        .patch_fields(variant_id, fields.into_inner())
        .await?;
    Ok(Json(MessageResponse::patched(variant_id, outcome)))
}

/// Delete a variant
#[delete("/<variant_id>")]
pub async fn delete_variant(
    context: &State<Arc<AppContext>>,
    variant_id: &str,
) -> ApiResult<MessageResponse> {
    let outcome = context.write_service().delete(variant_id).await?;
    Ok(Json(MessageResponse::deleted(variant_id, outcome)))
}
