use super::*;

/// Tests adding and removing attendees and groups on an event.
///
/// Expected: Ok for each step with the event payload reflecting the links
#[tokio::test]
async fn adds_and_removes_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = EventRepository::new(db);
    repo.add_user(event.id, user.id).await?;
    repo.add_group(event.id, group.id).await?;

    let loaded = repo.get_by_id(event.id).await?;
    assert_eq!(loaded.users.len(), 1);
    assert_eq!(loaded.groups.len(), 1);

    repo.remove_user(event.id, user.id).await?;
    repo.remove_group(event.id, group.id).await?;

    let loaded = repo.get_by_id(event.id).await?;
    assert!(loaded.users.is_empty());
    assert!(loaded.groups.is_empty());

    Ok(())
}

/// Tests adding the same user and group twice.
///
/// Expected: Ok(()) with exactly one link of each kind
#[tokio::test]
async fn adding_twice_keeps_one_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = EventRepository::new(db);
    repo.add_user(event.id, user.id).await?;
    repo.add_user(event.id, user.id).await?;
    repo.add_group(event.id, group.id).await?;
    repo.add_group(event.id, group.id).await?;

    let user_links = entity::prelude::EventUser::find()
        .filter(entity::event_user::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    let group_links = entity::prelude::EventGroup::find()
        .filter(entity::event_group::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(user_links, 1);
    assert_eq!(group_links, 1);

    Ok(())
}

/// Tests removing links that were never made.
///
/// Expected: Ok(()) for both removals
#[tokio::test]
async fn removing_absent_links_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.remove_user(event.id, user.id).await.is_ok());
    assert!(repo.remove_group(event.id, group.id).await.is_ok());

    Ok(())
}

/// Tests association calls where one side does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) for each call
#[tokio::test]
async fn missing_side_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = EventRepository::new(db);

    assert!(matches!(
        repo.add_user(999, user.id).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.add_user(event.id, 999).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.add_group(event.id, 999).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.remove_group(999, group.id).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
