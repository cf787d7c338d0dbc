use crate::server::{
    data::student::StudentRepository, model::student::StudentChanges,
    service::student::write_err,
};

use super::*;

/// Tests a foreign key violation on insert maps to a missing group.
///
/// Covers a group deleted between the existence check and the write.
///
/// Expected: AppError::GroupErr(NotFound)
#[tokio::test]
async fn maps_foreign_key_violation_to_group_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = StudentRepository::new(db)
        .create(CreateStudentParam {
            name: "Bob".to_string(),
            age: 10,
            group_id: Some(99),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        write_err(err, None, Some(99)),
        AppError::GroupErr(GroupError::NotFound(99))
    ));

    let students = entity::prelude::Student::find().all(db).await?;
    assert!(students.is_empty());

    Ok(())
}

/// Tests a vanished student row maps to a missing student.
///
/// Expected: AppError::StudentErr(NotFound)
#[tokio::test]
async fn maps_missing_row_to_student_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let changes = StudentChanges {
        age: Some(10),
        ..Default::default()
    };
    let err = StudentRepository::new(db)
        .update(7, changes)
        .await
        .unwrap_err();

    assert!(matches!(
        write_err(err, Some(7), None),
        AppError::StudentErr(StudentError::NotFound(7))
    ));

    Ok(())
}

/// Tests errors unrelated to constraints pass through unchanged.
///
/// Expected: AppError::DbErr
#[tokio::test]
async fn passes_other_errors_through() {
    let err = DbErr::Custom("connection reset".to_string());

    assert!(matches!(
        write_err(err, Some(1), Some(2)),
        AppError::DbErr(DbErr::Custom(_))
    ));
}
