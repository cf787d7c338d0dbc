//! Domain & parameter models for group operations

use crate::{
    model::group::{CreateGroupDto, GroupDetailDto, GroupDto, UpdateGroupDto},
    server::model::student::Student,
};

/// The group domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
}

impl Group {
    /// Converts an entity model to the group domain model
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// A group along with every student whose `group_id` references it
///
/// Members are gathered by querying students on the foreign key; the group itself
/// holds no reference to them.
#[derive(Debug, Clone)]
pub struct GroupWithMembers {
    pub group: Group,
    pub students: Vec<Student>,
}

impl GroupWithMembers {
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn into_dto(self) -> GroupDetailDto {
        GroupDetailDto {
            student_count: self.student_count(),
            group: self.group.into_dto(),
            students: self.students.into_iter().map(Student::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new group
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
}

impl From<CreateGroupDto> for CreateGroupParam {
    fn from(dto: CreateGroupDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for renaming an existing group
///
/// A `None` name leaves the group as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParam {
    pub name: Option<String>,
}

impl From<UpdateGroupDto> for UpdateGroupParam {
    fn from(dto: UpdateGroupDto) -> Self {
        Self { name: dto.name }
    }
}
