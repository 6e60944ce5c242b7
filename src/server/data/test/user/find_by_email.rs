use super::*;

/// Tests finding an active user by email.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("alice@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that a soft-deleted user's email no longer matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .deleted()
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("gone@example.com").await?.is_none());

    Ok(())
}
