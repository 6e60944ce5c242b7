use super::*;

/// Tests deleting an event removes its attendance links.
///
/// Expected: Ok(()) with event, user links and group links gone
#[tokio::test]
async fn deletes_event_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_event(db, event.id, user.id).await?;
    factory::helpers::add_group_to_event(db, event.id, group.id).await?;

    let repo = EventRepository::new(db);
    repo.delete(event.id).await?;

    assert!(entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .is_none());
    let user_links = entity::prelude::EventUser::find()
        .filter(entity::event_user::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    let group_links = entity::prelude::EventGroup::find()
        .filter(entity::event_group::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(user_links, 0);
    assert_eq!(group_links, 0);

    Ok(())
}

/// Tests deleting an event that does not exist.
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
        repo.delete(77).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
