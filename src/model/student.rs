use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::patch::Patch;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub group_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub group_id: Option<i32>,
}

/// Partial update of a student.
///
/// Omitted fields keep their stored value. `group_id: null` unassigns the student,
/// while `name` and `age` may be omitted but never nulled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<i32>)]
    pub age: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<i32>)]
    pub group_id: Patch<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferDto {
    pub message: String,
    pub student: StudentDto,
}
