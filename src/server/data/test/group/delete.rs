use super::*;

/// Tests deleting a group by ID.
///
/// Expected: Ok(1) with the group removed
#[tokio::test]
async fn deletes_group_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let deleted = GroupRepository::new(db).delete(group.id).await?;

    assert_eq!(deleted, 1);
    let db_group = entity::prelude::Group::find_by_id(group.id).one(db).await?;
    assert!(db_group.is_none());

    Ok(())
}

/// Tests deleting a group that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deletes_nothing_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = GroupRepository::new(db).delete(7).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
