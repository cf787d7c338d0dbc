use super::*;

/// Tests a new group name is accepted and retrievable afterwards.
///
/// Expected: Ok with the group listed
#[tokio::test]
async fn creates_group_with_new_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let group = service
        .create(CreateGroupParam {
            name: "A".to_string(),
        })
        .await?;

    let groups = service.list().await?;
    assert_eq!(groups, vec![group.clone()]);

    let fetched = service.get_with_members(group.id).await?;
    assert_eq!(fetched.group.name, "A");

    Ok(())
}

/// Tests creating a group with a name already in use.
///
/// Expected: Err(GroupError::NameTaken)
#[tokio::test]
async fn fails_for_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).name("A").build().await?;

    let result = GroupService::new(db)
        .create(CreateGroupParam {
            name: "A".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::NameTaken(ref name))) if name == "A"
    ));

    let count = entity::prelude::Group::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests creating a group with a blank name.
///
/// Expected: Err(ValidationError::BlankField)
#[tokio::test]
async fn fails_for_blank_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db)
        .create(CreateGroupParam {
            name: "  ".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::BlankField("name")))
    ));

    Ok(())
}

/// Tests a unique violation raised by the database maps to a name conflict.
///
/// Covers an insert that slips past the `find_by_name` check.
///
/// Expected: AppError::GroupErr(NameTaken)
#[tokio::test]
async fn maps_unique_violation_to_name_taken() -> Result<(), DbErr> {
    use crate::server::{data::group::GroupRepository, service::group::name_conflict};

    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.create(CreateGroupParam {
        name: "A".to_string(),
    })
    .await?;

    let err = repo
        .create(CreateGroupParam {
            name: "A".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        name_conflict(err, "A".to_string()),
        AppError::GroupErr(GroupError::NameTaken(ref name)) if name == "A"
    ));

    Ok(())
}
