//! Health route
//!
//! `GET /health` answers 200 while the service is operational (cache
//! trouble only degrades it) and 503 once the store is unreachable.

use std::sync::Arc;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, routes, Route, State};
use variants_infrastructure::di::AppContext;
use variants_infrastructure::health::HealthResponse;

/// Routes mounted at the root
pub fn routes() -> Vec<Route> {
    routes![health_check]
}

/// Probe the store and the cache
#[get("/health")]
pub async fn health_check(context: &State<Arc<AppContext>>) -> (Status, Json<HealthResponse>) {
    let report = context.health_report().await;
    let status = if report.status.is_operational() {
        Status::Ok
    } else {
        Status::ServiceUnavailable
    };
    (status, Json(report))
}
