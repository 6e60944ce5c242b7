use super::*;

/// Tests getting a group loads its active members.
///
/// Verifies that a soft-deleted member is left out of the payload even though
/// the membership row remains.
///
/// Expected: Ok(Group) with only the active member
#[tokio::test]
async fn loads_active_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let active = factory::create_user(db).await?;
    let deleted = factory::user::UserFactory::new(db).deleted().build().await?;
    factory::helpers::add_user_to_group(db, group.id, active.id).await?;
    factory::helpers::add_user_to_group(db, group.id, deleted.id).await?;

    let repo = GroupRepository::new(db);
    let result = repo.get_by_id(group.id).await?;

    assert_eq!(result.name, group.name);
    assert_eq!(result.users.len(), 1);
    assert_eq!(result.users[0].id, active.id);

    Ok(())
}

/// Tests getting a group that does not exist.
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

    assert!(matches!(
        repo.get_by_id(42).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
