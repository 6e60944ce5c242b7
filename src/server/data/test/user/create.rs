use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the user with the given fields, sets both
/// timestamps, and leaves the user undeleted.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "alice123".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice123");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.created_at, user.updated_at);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_none());
    assert_eq!(stored.password_hash, "hash");

    Ok(())
}

/// Tests that created users receive distinct IDs.
///
/// Expected: Ok with two different IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            username: "first".to_string(),
            email: "first@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            username: "second".to_string(),
            email: "second@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that the database rejects a second active user with the same email.
///
/// Verifies the partial unique index holds even when no service-level check
/// runs first, and reports the violation as a unique constraint error.
///
/// Expected: Err(DbErr) classified as UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_active_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "alice456".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a deleted user's email can be used by a new user.
///
/// Expected: Ok(User) alongside the deleted row
#[tokio::test]
async fn reuses_email_of_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .deleted()
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .deleted()
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "alice123".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.email, "alice@example.com");

    Ok(())
}
