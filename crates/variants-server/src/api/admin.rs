//! Administrative routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/admin/cache/variants` | DELETE | Evict the cached variant listing |

use std::sync::Arc;

use rocket::serde::json::Json;
use rocket::{delete, routes, Route, State};
use tracing::info;
use variants_infrastructure::di::AppContext;

use super::error::ApiResult;
use super::models::MessageResponse;

/// Routes mounted under `/admin`
pub fn routes() -> Vec<Route> {
    routes![evict_variant_listing]
}

/// Evict the cached listing so the next read repopulates it
///
/// A cache failure is reported as 500; there is nothing to fall back to.
#[delete("/cache/variants")]
pub async fn evict_variant_listing(context: &State<Arc<AppContext>>) -> ApiResult<MessageResponse> {
    let removed = context.read_service().invalidate_listing().await?;
    info!(removed, "variant listing eviction requested");
    let response = if removed {
        MessageResponse::success("The cached variant listing has been evicted")
    } else {
        MessageResponse::warning("There was no cached variant listing to evict")
    };
    Ok(Json(response))
}
