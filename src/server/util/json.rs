use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections become `ValidationError::MalformedBody`.
///
/// Behaves like `axum::Json` but answers malformed, mistyped or non-JSON bodies with
/// the application's 400 error body instead of axum's plain-text 415/422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
