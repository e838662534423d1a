//! Domain error to HTTP status mapping

use rocket::http::Status;
use variants_domain::error::Error;
use variants_server::api::error::ApiError;

#[test]
fn test_invalid_argument_is_bad_request() {
    let err = ApiError::from(Error::invalid_argument("name must not be empty"));

    assert_eq!(err.status, Status::BadRequest);
    assert!(err.message.contains("name must not be empty"));
}

#[test]
fn test_store_and_cache_errors_are_internal() {
    assert_eq!(
        ApiError::from(Error::database("unreachable")).status,
        Status::InternalServerError
    );
    assert_eq!(
        ApiError::from(Error::cache("unreachable")).status,
        Status::InternalServerError
    );
    assert_eq!(
        ApiError::from(Error::internal("bug")).status,
        Status::InternalServerError
    );
}
