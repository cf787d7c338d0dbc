use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Path parameter extractor whose rejections become `ValidationError::InvalidPath`.
///
/// Behaves like `axum::extract::Path` but answers unparsable segments, such as a
/// non-numeric or out-of-range ID, with the application's JSON 400 error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
