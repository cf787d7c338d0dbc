use super::*;

/// Tests moving a student into another group.
///
/// Expected: Ok with the new group_id and a message naming both
#[tokio::test]
async fn transfers_student_to_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_from, members) = factory::helpers::create_group_with_students(db, 1).await?;
    let to = factory::group::GroupFactory::new(db).name("B").build().await?;
    let student = &members[0];

    let transfer = StudentService::new(db).transfer(student.id, to.id).await?;

    assert_eq!(transfer.student.group_id, Some(to.id));
    assert_eq!(transfer.group.id, to.id);
    assert_eq!(
        transfer.message(),
        format!("Student {} transferred to group B", student.name)
    );

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.group_id, Some(to.id));

    Ok(())
}

/// Tests transferring to a group that does not exist.
///
/// Expected: Err(GroupError::NotFound) with the student unchanged
#[tokio::test]
async fn fails_for_missing_group_and_keeps_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, members) = factory::helpers::create_group_with_students(db, 1).await?;
    let service = StudentService::new(db);

    let result = service.transfer(members[0].id, group.id + 50).await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::NotFound(_)))
    ));
    assert_eq!(service.get(members[0].id).await?.group_id, Some(group.id));

    Ok(())
}

/// Tests transferring an unknown student to an unknown group.
///
/// Expected: Err(StudentError::NotFound) since the student is checked first
#[tokio::test]
async fn reports_missing_student_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db).transfer(1, 1).await;

    assert!(matches!(
        result,
        Err(AppError::StudentErr(StudentError::NotFound(1)))
    ));

    Ok(())
}
