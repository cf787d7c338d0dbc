use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        group::{CreateGroupDto, GroupDetailDto, GroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        model::group::{CreateGroupParam, Group, UpdateGroupParam},
        service::group::GroupService,
        state::AppState,
        util::{json::JsonBody, path::PathParam},
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create a new group.
///
/// # Returns
/// - `200 OK` - Successfully created group
/// - `400 Bad Request` - Name already taken, blank, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Group name already exists or is invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .create(CreateGroupParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).list().await?;

    let dto: Vec<GroupDto> = groups.into_iter().map(Group::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a group with all of its students and the member count.
#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDetailDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get_with_members(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Rename a group.
///
/// Omitting `name`, or sending the current name, returns the group unchanged.
///
/// # Returns
/// - `200 OK` - The group after the rename
/// - `400 Bad Request` - Name held by another group, blank, or malformed body
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Group name already exists or is invalid", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .rename(id, UpdateGroupParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group, unassigning its students first.
///
/// Member students are kept with a null `group_id`.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - ID is not a valid integer
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error, nothing is changed
#[utoipa::path(
    delete,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted group", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detached = GroupService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Group deleted successfully, {} student(s) unassigned", detached),
        }),
    ))
}
