//! Group data repository for database operations
//!
//! Provides the `GroupRepository` for managing group records. Handles the conversion
//! of database entity models into domain models for usage within services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{CreateGroupParam, Group};

/// Repository providing database operations for group management.
pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new GroupRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GroupRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new group
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the group name
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with generated ID
    /// - `Err(DbErr)` - Database error during insert, including a unique constraint
    ///   violation on `name`
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Gets all groups ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Finds a group by ID
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The group if found
    /// - `Ok(None)` - No group exists with the ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Finds a group by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Checks whether a group with the ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find()
            .filter(entity::group::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Renames a group
    ///
    /// # Arguments
    /// - `id` - ID of the group to rename
    /// - `name` - The new name
    ///
    /// # Returns
    /// - `Ok(Group)` - The renamed group
    /// - `Err(DbErr::RecordNotFound)` - No group exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn rename(&self, id: i32, name: String) -> Result<Group, DbErr> {
        let group = entity::prelude::Group::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Group with id {} not found",
                id
            )))?;

        let mut active_model: entity::group::ActiveModel = group.into();
        active_model.name = ActiveValue::Set(name);

        let entity = active_model.update(self.db).await?;

        Ok(Group::from_entity(entity))
    }

    /// Deletes the group with the provided ID
    ///
    /// Does not touch students; callers detach members first.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 if the group did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
