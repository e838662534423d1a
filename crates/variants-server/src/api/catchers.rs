//! JSON catchers
//!
//! Unmatched routes and rejected request bodies answer with the same
//! `{"error": ...}` body as handler failures.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, catchers, Catcher, Request};

use super::models::ErrorResponse;

/// Catchers registered at the root
pub fn catchers() -> Vec<Catcher> {
    catchers![json_catcher]
}

/// Answer any unhandled status with a JSON error body
#[catch(default)]
pub fn json_catcher(status: Status, request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let message = match status.code {
        404 => format!("No route for {} {}", request.method(), request.uri()),
        400 | 422 => "Malformed request body: expected a JSON document".to_string(),
        _ => status.reason().unwrap_or("Unknown error").to_string(),
    };
    (status, Json(ErrorResponse::new(message)))
}
