//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names across all factories in a test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group and `count` students assigned to it.
///
/// All entities are created with default values. Use the individual factories if
/// you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of member students to create
///
/// # Returns
/// - `Ok((group, students))` - The group and its members in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_students(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::group::Model, Vec<entity::student::Model>), DbErr> {
    let group = crate::factory::group::create_group(db).await?;

    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        let student = crate::factory::student::StudentFactory::new(db)
            .group_id(group.id)
            .build()
            .await?;
        students.push(student);
    }

    Ok((group, students))
}
