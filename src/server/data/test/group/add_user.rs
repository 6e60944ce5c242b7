use super::*;

/// Tests adding a user to a group.
///
/// Expected: Ok(()) and the user appears in the group's members
#[tokio::test]
async fn adds_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    repo.add_user(group.id, user.id).await?;

    let loaded = repo.get_by_id(group.id).await?;
    assert_eq!(loaded.users.len(), 1);
    assert_eq!(loaded.users[0].id, user.id);

    Ok(())
}

/// Tests adding the same user twice.
///
/// Expected: Ok(()) both times with exactly one membership row
#[tokio::test]
async fn adding_twice_keeps_one_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    repo.add_user(group.id, user.id).await?;
    repo.add_user(group.id, user.id).await?;

    assert_eq!(member_rows(db, group.id).await?, 1);

    Ok(())
}

/// Tests adding a missing or deleted user, or adding to a missing group.
///
/// Expected: Err(DbErr::RecordNotFound) in each case with no rows written
#[tokio::test]
async fn missing_side_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let user = factory::create_user(db).await?;
    let deleted = factory::user::UserFactory::new(db).deleted().build().await?;

    let repo = GroupRepository::new(db);

    assert!(matches!(
        repo.add_user(group.id, 999).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.add_user(group.id, deleted.id).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.add_user(999, user.id).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert_eq!(member_rows(db, group.id).await?, 0);

    Ok(())
}
