use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static INDEX_TAG: &str = "index";

/// Landing endpoint pointing clients at the interactive API documentation.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Service is up", body = MessageDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Welcome to the student roster API, visit /docs for the API documentation"
                .to_string(),
        }),
    )
}
