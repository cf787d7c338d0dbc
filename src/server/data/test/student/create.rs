use super::*;

/// Tests creating a student assigned to a group.
///
/// Expected: Ok with all fields stored as given
#[tokio::test]
async fn creates_student_in_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let student = StudentRepository::new(db)
        .create(CreateStudentParam {
            name: "Bob".to_string(),
            age: 10,
            group_id: Some(group.id),
        })
        .await?;

    assert_eq!(student.name, "Bob");
    assert_eq!(student.age, 10);
    assert_eq!(student.group_id, Some(group.id));

    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_student.group_id, Some(group.id));

    Ok(())
}

/// Tests creating a student without a group.
///
/// Expected: Ok with group_id left null
#[tokio::test]
async fn creates_unassigned_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentRepository::new(db)
        .create(CreateStudentParam {
            name: "Alice".to_string(),
            age: 6,
            group_id: None,
        })
        .await?;

    assert_eq!(student.group_id, None);

    let all = StudentRepository::new(db).get_all().await?;
    assert_eq!(all, vec![student]);

    Ok(())
}
