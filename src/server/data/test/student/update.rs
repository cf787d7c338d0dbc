use super::*;

/// Tests that only the provided fields are written.
///
/// Expected: Ok with name changed, age and group unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let student = factory::student::StudentFactory::new(db)
        .age(14)
        .group_id(group.id)
        .build()
        .await?;

    let updated = StudentRepository::new(db)
        .update(
            student.id,
            StudentChanges {
                name: Some("X".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "X");
    assert_eq!(updated.age, 14);
    assert_eq!(updated.group_id, Some(group.id));

    Ok(())
}

/// Tests clearing the group reference through an update.
///
/// Expected: Ok with group_id set to null
#[tokio::test]
async fn clears_group_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_group, members) = factory::helpers::create_group_with_students(db, 1).await?;

    let updated = StudentRepository::new(db)
        .update(
            members[0].id,
            StudentChanges {
                group_id: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.group_id, None);

    Ok(())
}

/// Tests an empty change set leaves the record untouched.
///
/// Expected: Ok with the stored student returned as is
#[tokio::test]
async fn empty_changes_return_stored_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let updated = StudentRepository::new(db)
        .update(student.id, StudentChanges::default())
        .await?;

    assert_eq!(updated.name, student.name);
    assert_eq!(updated.age, student.age);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(99, StudentChanges::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
