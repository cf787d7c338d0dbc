use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq)]
pub enum GroupError {
    /// No group exists with the referenced ID.
    ///
    /// Raised both for direct group lookups and for student operations that reference
    /// a group. Results in a 404 Not Found response.
    #[error("Group {0} not found")]
    NotFound(i32),

    /// Another group already holds the requested name.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Group name '{0}' already exists")]
    NameTaken(String),
}

impl IntoResponse for GroupError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NameTaken(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self)
    }
}
