use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{group, index, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Roster API",
        description = "Manage students and the groups they belong to",
        version = "1.0.0"
    ),
    tags(
        (name = "group", description = "Group management endpoints"),
        (name = "student", description = "Student management endpoints")
    )
)]
struct ApiDoc;

/// Builds the application router together with the OpenAPI document.
///
/// The document is served at `/api-docs/openapi.json` and browsable through the
/// Swagger UI at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::index))
        .routes(routes!(group::create_group, group::get_all_groups))
        .routes(routes!(
            group::get_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(student::create_student, student::get_all_students))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(student::transfer_student))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
