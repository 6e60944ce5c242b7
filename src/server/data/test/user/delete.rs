use super::*;

/// Tests soft-deleting a user.
///
/// Verifies that the row remains with `deleted_at` set and that the user is no
/// longer visible through the repository.
///
/// Expected: Ok(()) and row marked deleted
#[tokio::test]
async fn soft_deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());
    assert!(matches!(
        repo.get_by_id(user.id).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}

/// Tests deleting the same user twice.
///
/// Expected: Err(DbErr::RecordNotFound) on the second delete
#[tokio::test]
async fn second_delete_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;
    let result = repo.delete(user.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests deleting a user that never existed.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(matches!(
        repo.delete(999).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
