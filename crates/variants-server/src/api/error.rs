//! HTTP error mapping
//!
//! Client errors become 400; every other failure becomes 500 and is logged.
//! The body is always `{"error": <message>}`.

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use tracing::error;
use variants_domain::error::Error;

use super::models::ErrorResponse;

/// Error returned by route handlers
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to answer with
    pub status: Status,
    /// Message placed in the `error` field
    pub message: String,
}

impl ApiError {
    /// Build an error with an explicit status
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if err.is_client_error() {
            return Self::new(Status::BadRequest, err.to_string());
        }
        error!(error = %err, "request failed");
        Self::new(Status::InternalServerError, err.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(ErrorResponse::new(self.message))).respond_to(request)
    }
}

/// Result type of route handlers
pub type ApiResult<T> = Result<Json<T>, ApiError>;
