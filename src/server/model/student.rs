//! Domain & parameter models for student operations
//!
//! Defines the student domain model, the create/update/transfer parameter models,
//! and the conversions from entity models and into DTOs.

use crate::{
    model::{
        patch::Patch,
        student::{CreateStudentDto, StudentDto, TransferDto, UpdateStudentDto},
    },
    server::model::group::Group,
};

/// Youngest accepted student age, inclusive.
pub const MIN_AGE: i32 = 6;
/// Oldest accepted student age, inclusive.
pub const MAX_AGE: i32 = 25;

/// The student domain model
///
/// `group_id` of `None` means the student is unassigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub group_id: Option<i32>,
}

impl Student {
    /// Converts an entity model to the student domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            group_id: entity.group_id,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            age: self.age,
            group_id: self.group_id,
        }
    }
}

/// Parameters for creating a new student
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub name: String,
    pub age: i32,
    pub group_id: Option<i32>,
}

impl From<CreateStudentDto> for CreateStudentParam {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
            group_id: dto.group_id,
        }
    }
}

/// Parameters for a partial student update
///
/// Only fields that are not `Patch::Absent` are applied. `Patch::Null` is only
/// meaningful for `group_id`; the service rejects it for `name` and `age`.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParam {
    pub name: Patch<String>,
    pub age: Patch<i32>,
    pub group_id: Patch<i32>,
}

impl From<UpdateStudentDto> for UpdateStudentParam {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
            group_id: dto.group_id,
        }
    }
}

/// Validated field changes ready to be written by the repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub group_id: Option<Option<i32>>,
}

impl StudentChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.group_id.is_none()
    }
}

/// Result of moving a student into a group
#[derive(Debug, Clone)]
pub struct StudentTransfer {
    pub student: Student,
    pub group: Group,
}

impl StudentTransfer {
    /// Confirmation naming both the student and the destination group
    pub fn message(&self) -> String {
        format!(
            "Student {} transferred to group {}",
            self.student.name, self.group.name
        )
    }

    pub fn into_dto(self) -> TransferDto {
        TransferDto {
            message: self.message(),
            student: self.student.into_dto(),
        }
    }
}
