use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::StudentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
}

/// Rename request. A missing or null `name` leaves the group unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    #[serde(default)]
    pub name: Option<String>,
}

/// A group together with every student currently assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDetailDto {
    pub group: GroupDto,
    pub student_count: usize,
    pub students: Vec<StudentDto>,
}
