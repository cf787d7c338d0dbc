use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Request input that is malformed before any domain rule applies.
///
/// Every variant results in a 400 Bad Request response.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A name field was empty or only whitespace.
    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),

    /// A required field was explicitly set to null in a partial update.
    #[error("Field '{0}' cannot be null")]
    NullField(&'static str),

    /// The request body was not valid JSON for the endpoint.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A path segment could not be parsed into the expected type.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self)
    }
}
