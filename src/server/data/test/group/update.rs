use super::*;

/// Tests renaming a group keeps its members.
///
/// Expected: Ok(Group) with new name and existing members
#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let user = factory::create_user(db).await?;
    factory::helpers::add_user_to_group(db, group.id, user.id).await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(
            group.id,
            UpdateGroupParam {
                name: Some("Climbers".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "Climbers");
    assert_eq!(updated.users.len(), 1);

    Ok(())
}

/// Tests an update without fields leaves the name unchanged.
///
/// Expected: Ok(Group) with original name
#[tokio::test]
async fn empty_update_keeps_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let updated = repo.update(group.id, UpdateGroupParam::default()).await?;

    assert_eq!(updated.name, group.name);

    Ok(())
}

/// Tests updating a group that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_group_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo
        .update(
            7,
            UpdateGroupParam {
                name: Some("Nobody".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
