use super::*;

/// Tests the full room lifecycle.
///
/// Creates room (5, 2), lists it, replaces it with (6, 3) and lists again.
///
/// Expected: Ok with id unchanged and fields replaced
#[tokio::test]
async fn round_trip_keeps_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(RoomParams {
            number: 5,
            floor: 2,
        })
        .await?;

    let rooms = repo.get_all().await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!((rooms[0].number, rooms[0].floor), (5, 2));

    repo.update(
        room.id,
        RoomParams {
            number: 6,
            floor: 3,
        },
    )
    .await?;

    let rooms = repo.get_all().await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, room.id);
    assert_eq!((rooms[0].number, rooms[0].floor), (6, 3));

    Ok(())
}

/// Tests that rooms have no uniqueness rule.
///
/// Expected: Ok with two identical rooms stored
#[tokio::test]
async fn allows_identical_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db).number(1).floor(1).build().await?;
    factory::room::RoomFactory::new(db).number(1).floor(1).build().await?;

    let repo = RoomRepository::new(db);

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}

/// Tests updating and deleting an id that has no row.
///
/// Expected: Err(DbErr::RecordNotUpdated) on update, Ok(0) on delete
#[tokio::test]
async fn missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let result = repo
        .update(
            7,
            RoomParams {
                number: 1,
                floor: 1,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    assert_eq!(repo.delete(7).await?, 0);

    Ok(())
}
