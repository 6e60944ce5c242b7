use super::*;

/// Tests listing groups attaches each group's own members.
///
/// Expected: Ok(Vec<Group>) ordered by ID with members split per group
#[tokio::test]
async fn lists_groups_with_their_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::helpers::add_user_to_group(db, first.id, alice.id).await?;
    factory::helpers::add_user_to_group(db, first.id, bob.id).await?;
    factory::helpers::add_user_to_group(db, second.id, bob.id).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, first.id);
    assert_eq!(
        groups[0].users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![alice.id, bob.id]
    );
    assert_eq!(
        groups[1].users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![bob.id]
    );

    Ok(())
}
