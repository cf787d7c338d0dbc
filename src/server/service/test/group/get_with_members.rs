use super::*;

/// Tests the member view includes every assigned student and the count.
///
/// Expected: Ok with two members and a count of 2
#[tokio::test]
async fn returns_group_with_members_and_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, members) = factory::helpers::create_group_with_students(db, 2).await?;
    factory::create_student(db).await?;

    let result = GroupService::new(db).get_with_members(group.id).await?;

    assert_eq!(result.group.id, group.id);
    assert_eq!(result.student_count(), 2);

    let ids: Vec<i32> = result.students.iter().map(|s| s.id).collect();
    let expected: Vec<i32> = members.iter().map(|s| s.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests the member view for an unknown group.
///
/// Expected: Err(GroupError::NotFound)
#[tokio::test]
async fn fails_for_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db).get_with_members(5).await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::NotFound(5)))
    ));

    Ok(())
}
