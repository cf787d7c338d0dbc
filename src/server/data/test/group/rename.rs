use super::*;

/// Tests renaming an existing group.
///
/// Expected: Ok with the new name persisted
#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let renamed = GroupRepository::new(db)
        .rename(group.id, "Renamed".to_string())
        .await?;

    assert_eq!(renamed.id, group.id);
    assert_eq!(renamed.name, "Renamed");

    let db_group = entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_group.name, "Renamed");

    Ok(())
}

/// Tests renaming a group that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupRepository::new(db)
        .rename(42, "Renamed".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
