use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::patch::Patch,
    server::{
        data::{group::GroupRepository, student::StudentRepository},
        error::{group::GroupError, student::StudentError, AppError},
        model::student::{
            CreateStudentParam, Student, StudentChanges, StudentTransfer, UpdateStudentParam,
        },
        util::validate::{require_non_null, validate_age, validate_name},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// The group reference is checked before the age bound so a request failing
    /// both reports the missing group.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(AppError::GroupErr(NotFound))` - `group_id` references no group
    /// - `Err(AppError::StudentErr(AgeOutOfRange))` - Age outside 6..=25
    /// - `Err(AppError::ValidationErr)` - The name is blank
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        if let Some(group_id) = param.group_id {
            self.require_group(group_id).await?;
        }

        validate_age(param.age)?;
        validate_name("name", &param.name)?;

        let group_id = param.group_id;
        let student = StudentRepository::new(self.db)
            .create(param)
            .await
            .map_err(|err| write_err(err, None, group_id))?;

        tracing::info!("Created student {} ({})", student.id, student.name);

        Ok(student)
    }

    /// Gets all students
    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    /// Gets a student by ID
    ///
    /// # Returns
    /// - `Ok(Student)` - The student
    /// - `Err(AppError::StudentErr(NotFound))` - No student exists with the ID
    pub async fn get(&self, id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(StudentError::NotFound(id))?;

        Ok(student)
    }

    /// Applies a partial update to a student
    ///
    /// Existence of the student and of a newly referenced group is checked before
    /// any field validation. Omitted fields keep their value; `group_id: null`
    /// unassigns the student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(AppError::StudentErr(NotFound))` - No student exists with the ID
    /// - `Err(AppError::GroupErr(NotFound))` - `group_id` references no group
    /// - `Err(AppError::ValidationErr)` - Blank name, or null name/age
    /// - `Err(AppError::StudentErr(AgeOutOfRange))` - Age outside 6..=25
    pub async fn update(&self, id: i32, param: UpdateStudentParam) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(StudentError::NotFound(id).into());
        }

        if let Patch::Value(group_id) = &param.group_id {
            self.require_group(*group_id).await?;
        }

        let name = require_non_null("name", param.name)?;
        if let Some(name) = &name {
            validate_name("name", name)?;
        }

        let age = require_non_null("age", param.age)?;
        if let Some(age) = age {
            validate_age(age)?;
        }

        let changes = StudentChanges {
            name,
            age,
            group_id: param.group_id.into_option(),
        };
        let group_id = changes.group_id.flatten();

        let student = repo
            .update(id, changes)
            .await
            .map_err(|err| write_err(err, Some(id), group_id))?;

        tracing::info!("Updated student {} ({})", student.id, student.name);

        Ok(student)
    }

    /// Deletes a student; groups are never affected
    ///
    /// # Returns
    /// - `Ok(())` - The student was deleted
    /// - `Err(AppError::StudentErr(NotFound))` - No student exists with the ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = StudentRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(StudentError::NotFound(id).into());
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }

    /// Moves a student into a group
    ///
    /// # Returns
    /// - `Ok(StudentTransfer)` - The updated student and its new group
    /// - `Err(AppError::StudentErr(NotFound))` - No student exists with the ID
    /// - `Err(AppError::GroupErr(NotFound))` - No group exists with the ID
    pub async fn transfer(
        &self,
        student_id: i32,
        group_id: i32,
    ) -> Result<StudentTransfer, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(student_id).await?.is_none() {
            return Err(StudentError::NotFound(student_id).into());
        }

        let group = GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or(GroupError::NotFound(group_id))?;

        let changes = StudentChanges {
            group_id: Some(Some(group.id)),
            ..Default::default()
        };
        let student = repo
            .update(student_id, changes)
            .await
            .map_err(|err| write_err(err, Some(student_id), Some(group_id)))?;

        let transfer = StudentTransfer { student, group };

        tracing::info!("{}", transfer.message());

        Ok(transfer)
    }

    async fn require_group(&self, group_id: i32) -> Result<(), AppError> {
        if !GroupRepository::new(self.db).exists(group_id).await? {
            return Err(GroupError::NotFound(group_id).into());
        }

        Ok(())
    }
}

/// Maps write failures caused by rows vanishing after the existence checks
///
/// A missing student row becomes `StudentError::NotFound` and a foreign key
/// violation on `group_id` becomes `GroupError::NotFound`.
pub(super) fn write_err(err: DbErr, student_id: Option<i32>, group_id: Option<i32>) -> AppError {
    if let (DbErr::RecordNotFound(_), Some(id)) = (&err, student_id) {
        return StudentError::NotFound(id).into();
    }

    match (err.sql_err(), group_id) {
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), Some(group_id)) => {
            GroupError::NotFound(group_id).into()
        }
        _ => err.into(),
    }
}
