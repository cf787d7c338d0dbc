use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{CreateStudentDto, StudentDto, TransferDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        model::student::{CreateStudentParam, Student, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
        util::{json::JsonBody, path::PathParam},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Create a new student.
///
/// The optional `group_id` must reference an existing group and `age` must lie
/// between 6 and 25 inclusive.
///
/// # Returns
/// - `200 OK` - Successfully created student
/// - `400 Bad Request` - Age out of range, blank name, or malformed body
/// - `404 Not Found` - Referenced group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .create(CreateStudentParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).list().await?;

    let dto: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Partially update a student.
///
/// Only fields present in the body are changed. `group_id: null` unassigns the
/// student; `name` and `age` cannot be null.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Age out of range, blank or null field, or malformed body
/// - `404 Not Found` - Student or referenced group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .update(id, UpdateStudentParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student deleted successfully".to_string(),
        }),
    ))
}

/// Move a student into a group.
///
/// # Returns
/// - `200 OK` - Confirmation naming student and group, plus the updated student
/// - `400 Bad Request` - An ID is not a valid integer
/// - `404 Not Found` - Student or group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students/{id}/transfer/{group_id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID"),
        ("group_id" = i32, Path, description = "Destination group ID")
    ),
    responses(
        (status = 200, description = "Successfully transferred student", body = TransferDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Student or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_student(
    State(state): State<AppState>,
    PathParam((id, group_id)): PathParam<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let transfer = StudentService::new(&state.db)
        .transfer(id, group_id)
        .await?;

    Ok((StatusCode::OK, Json(transfer.into_dto())))
}
