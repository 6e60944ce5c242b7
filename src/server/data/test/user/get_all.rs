use super::*;

/// Tests listing users skips soft-deleted rows.
///
/// Expected: Ok(Vec<User>) with only active users, ordered by ID
#[tokio::test]
async fn lists_active_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let _deleted = factory::user::UserFactory::new(db).deleted().build().await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_table_lists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
