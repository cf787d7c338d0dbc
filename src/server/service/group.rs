use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{group::GroupRepository, student::StudentRepository},
    error::{group::GroupError, AppError},
    model::group::{CreateGroupParam, Group, GroupWithMembers, UpdateGroupParam},
    util::validate::validate_name,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(AppError::ValidationErr)` - The name is blank
    /// - `Err(AppError::GroupErr(NameTaken))` - A group with this name already exists
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, AppError> {
        validate_name("name", &param.name)?;

        let repo = GroupRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(GroupError::NameTaken(param.name).into());
        }

        let name = param.name.clone();
        let group = repo
            .create(param)
            .await
            .map_err(|err| name_conflict(err, name))?;

        tracing::info!("Created group {} ({})", group.id, group.name);

        Ok(group)
    }

    /// Gets all groups
    pub async fn list(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Gets a group together with its member students
    ///
    /// # Returns
    /// - `Ok(GroupWithMembers)` - The group and every student assigned to it
    /// - `Err(AppError::GroupErr(NotFound))` - No group exists with the ID
    pub async fn get_with_members(&self, id: i32) -> Result<GroupWithMembers, AppError> {
        let group = GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(GroupError::NotFound(id))?;

        let students = StudentRepository::new(self.db).get_by_group_id(id).await?;

        Ok(GroupWithMembers { group, students })
    }

    /// Renames a group
    ///
    /// A missing name, or one equal to the current name, returns the group unchanged.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group after the rename
    /// - `Err(AppError::GroupErr(NotFound))` - No group exists with the ID
    /// - `Err(AppError::ValidationErr)` - The new name is blank
    /// - `Err(AppError::GroupErr(NameTaken))` - Another group already holds the name
    pub async fn rename(&self, id: i32, param: UpdateGroupParam) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        let group = repo.find_by_id(id).await?.ok_or(GroupError::NotFound(id))?;

        let name = match param.name {
            Some(name) if name != group.name => name,
            _ => return Ok(group),
        };

        validate_name("name", &name)?;

        if repo.find_by_name(&name).await?.is_some() {
            return Err(GroupError::NameTaken(name).into());
        }

        let renamed = repo
            .rename(id, name.clone())
            .await
            .map_err(|err| name_conflict(err, name))?;

        tracing::info!("Renamed group {} from {} to {}", id, group.name, renamed.name);

        Ok(renamed)
    }

    /// Deletes a group after detaching its members
    ///
    /// Detach and delete run in one transaction so students never reference a
    /// deleted group, even if the delete fails.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of students that were unassigned
    /// - `Err(AppError::GroupErr(NotFound))` - No group exists with the ID
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let Some(group) = GroupRepository::new(&txn).find_by_id(id).await? else {
            txn.rollback().await?;
            return Err(GroupError::NotFound(id).into());
        };

        let detached = StudentRepository::new(&txn).detach_from_group(id).await?;
        GroupRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted group {} ({}), unassigned {} students",
            group.id,
            group.name,
            detached
        );

        Ok(detached)
    }
}

/// Maps a unique constraint violation on the group name into `GroupError::NameTaken`
///
/// Covers a concurrent insert winning the race after the `find_by_name` check.
pub(super) fn name_conflict(err: DbErr, name: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => GroupError::NameTaken(name).into(),
        _ => err.into(),
    }
}
