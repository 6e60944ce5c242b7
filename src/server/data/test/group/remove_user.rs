use super::*;

/// Tests removing a member from a group.
///
/// Expected: Ok(()) and the membership row is gone
#[tokio::test]
async fn removes_member() -> Result<(), DbErr> {
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
    repo.remove_user(group.id, user.id).await?;

    assert_eq!(member_rows(db, group.id).await?, 0);

    Ok(())
}

/// Tests removing a user who is not a member.
///
/// Expected: Ok(()) with nothing changed
#[tokio::test]
async fn removing_non_member_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let member = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    factory::helpers::add_user_to_group(db, group.id, member.id).await?;

    let repo = GroupRepository::new(db);
    repo.remove_user(group.id, outsider.id).await?;

    assert_eq!(member_rows(db, group.id).await?, 1);

    Ok(())
}

/// Tests removing from a missing group or removing a missing user.
///
/// Expected: Err(DbErr::RecordNotFound)
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

    let repo = GroupRepository::new(db);

    assert!(matches!(
        repo.remove_user(999, user.id).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.remove_user(group.id, 999).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
