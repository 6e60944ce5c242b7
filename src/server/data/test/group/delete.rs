use super::*;

/// Tests deleting a group removes its membership and event links.
///
/// Expected: Ok(()) with group row, user links and event links gone
#[tokio::test]
async fn deletes_group_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let user = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    factory::helpers::add_user_to_group(db, group.id, user.id).await?;
    factory::helpers::add_group_to_event(db, event.id, group.id).await?;

    let repo = GroupRepository::new(db);
    repo.delete(group.id).await?;

    assert!(entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(member_rows(db, group.id).await?, 0);
    let event_links = entity::prelude::EventGroup::find()
        .filter(entity::event_group::Column::GroupId.eq(group.id))
        .count(db)
        .await?;
    assert_eq!(event_links, 0);

    // The user itself is untouched
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a group that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_group_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(matches!(
        repo.delete(11).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
