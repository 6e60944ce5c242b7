use super::*;

/// Tests creating a group.
///
/// Expected: Ok(Group) with the given name and no members
#[tokio::test]
async fn creates_group_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "Hikers".to_string(),
        })
        .await?;

    assert_eq!(group.name, "Hikers");
    assert!(group.users.is_empty());

    Ok(())
}

/// Tests that the unique index rejects a duplicate name.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.create(CreateGroupParam {
        name: "Hikers".to_string(),
    })
    .await?;
    let result = repo
        .create(CreateGroupParam {
            name: "Hikers".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
