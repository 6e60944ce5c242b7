use super::*;

/// Tests getting an event loads users and group summaries.
///
/// Verifies that soft-deleted attendees are left out.
///
/// Expected: Ok(Event) with one user and one group
#[tokio::test]
async fn loads_users_and_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let deleted = factory::user::UserFactory::new(db).deleted().build().await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_event(db, event.id, user.id).await?;
    factory::helpers::add_user_to_event(db, event.id, deleted.id).await?;
    factory::helpers::add_group_to_event(db, event.id, group.id).await?;

    let repo = EventRepository::new(db);
    let loaded = repo.get_by_id(event.id).await?;

    assert_eq!(loaded.users.len(), 1);
    assert_eq!(loaded.users[0].id, user.id);
    assert_eq!(loaded.groups.len(), 1);
    assert_eq!(loaded.groups[0].name, group.name);

    Ok(())
}

/// Tests getting an event that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_event_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(matches!(
        repo.get_by_id(5).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}

/// Tests listing events keeps relations per event.
///
/// Expected: Ok(Vec<Event>) ordered by ID, relations not mixed between events
#[tokio::test]
async fn lists_events_with_their_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_event(db, first.id, user.id).await?;
    factory::helpers::add_group_to_event(db, second.id, group.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_all().await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, first.id);
    assert_eq!(events[0].users.len(), 1);
    assert!(events[0].groups.is_empty());
    assert!(events[1].users.is_empty());
    assert_eq!(events[1].groups.len(), 1);

    Ok(())
}
