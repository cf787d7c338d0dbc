use super::*;

/// Tests finding a group by its exact name.
///
/// Expected: Ok(Some) for the stored name, Ok(None) otherwise
#[tokio::test]
async fn finds_group_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::group::GroupFactory::new(db)
        .name("Class A")
        .build()
        .await?;

    let repo = GroupRepository::new(db);

    let found = repo.find_by_name("Class A").await?;
    assert_eq!(found.map(|g| g.id), Some(created.id));

    let missing = repo.find_by_name("Class B").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the existence check used before assigning students.
///
/// Expected: true for a stored group, false for an unknown ID
#[tokio::test]
async fn reports_group_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let repo = GroupRepository::new(db);

    assert!(repo.exists(group.id).await?);
    assert!(!repo.exists(group.id + 100).await?);

    Ok(())
}
