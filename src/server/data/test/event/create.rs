use super::*;

/// Tests creating an event stores every field.
///
/// Expected: Ok(id) and a loadable event with no attendees
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc.with_ymd_and_hms(2025, 7, 4, 18, 0, 0).unwrap();

    let repo = EventRepository::new(db);
    let id = repo
        .create(CreateEventParam {
            name: "Launch party".to_string(),
            description: "Rooftop".to_string(),
            date,
            location: "Berlin".to_string(),
        })
        .await?;
    let event = repo.get_by_id(id).await?;

    assert_eq!(event.name, "Launch party");
    assert_eq!(event.description, "Rooftop");
    assert_eq!(event.date, date);
    assert_eq!(event.location, "Berlin");
    assert!(event.users.is_empty());
    assert!(event.groups.is_empty());

    Ok(())
}
