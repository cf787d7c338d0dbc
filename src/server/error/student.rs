use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::error_response,
    model::student::{MAX_AGE, MIN_AGE},
};

#[derive(Error, Debug, PartialEq)]
pub enum StudentError {
    /// No student exists with the referenced ID. Results in a 404 Not Found response.
    #[error("Student {0} not found")]
    NotFound(i32),

    /// Age outside the accepted range. Results in a 400 Bad Request response.
    #[error(
        "Age {0} is out of range, must be between {min} and {max}",
        min = MIN_AGE,
        max = MAX_AGE
    )]
    AgeOutOfRange(i32),
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AgeOutOfRange(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self)
    }
}
