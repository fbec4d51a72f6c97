use super::*;

/// Tests that only an exact (date, time, room) match counts as taken.
///
/// Expected: Ok(true) for the booked slot, Ok(false) when any one part differs
#[tokio::test]
async fn matches_exact_slot_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let patient = factory::create_patient(db).await?;
    factory::appointment::AppointmentFactory::new(db, doctor.id, patient.id)
        .date(date(14))
        .time(time(10))
        .room_number(3)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);

    assert!(repo.slot_taken(date(14), time(10), 3).await?);
    assert!(!repo.slot_taken(date(15), time(10), 3).await?);
    assert!(!repo.slot_taken(date(14), time(11), 3).await?);
    assert!(!repo.slot_taken(date(14), time(10), 4).await?);

    Ok(())
}
