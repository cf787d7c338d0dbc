//! Student data repository for database operations
//!
//! Provides the `StudentRepository` for managing student records, including the
//! member lookup and bulk detach used when a group is deleted.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{CreateStudentParam, Student, StudentChanges};

/// Repository providing database operations for student management.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// Performs no validation; the service checks age bounds and group existence first.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            age: ActiveValue::Set(param.age),
            group_id: ActiveValue::Set(param.group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Gets all students ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Finds a student by ID
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The student if found
    /// - `Ok(None)` - No student exists with the ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets every student assigned to the group, ordered by ID
    ///
    /// # Arguments
    /// - `group_id` - ID of the group whose members to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Members of the group, empty if none or the group is unknown
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_group_id(&self, group_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::GroupId.eq(group_id))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Applies the provided field changes to a student
    ///
    /// Fields left as `None` in `changes` are not written. An empty change set returns
    /// the stored student without issuing an UPDATE.
    ///
    /// # Arguments
    /// - `id` - ID of the student to update
    /// - `changes` - Validated field changes
    ///
    /// # Returns
    /// - `Ok(Student)` - The student after the update
    /// - `Err(DbErr::RecordNotFound)` - No student exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, changes: StudentChanges) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                id
            )))?;

        if changes.is_empty() {
            return Ok(Student::from_entity(student));
        }

        let mut active_model: entity::student::ActiveModel = student.into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(age) = changes.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(group_id) = changes.group_id {
            active_model.group_id = ActiveValue::Set(group_id);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity))
    }

    /// Clears `group_id` on every student assigned to the group
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of students detached
    /// - `Err(DbErr)` - Database error during update
    pub async fn detach_from_group(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::update_many()
            .col_expr(
                entity::student::Column::GroupId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::student::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the student with the provided ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 if the student did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
