use super::*;

/// Tests creating an appointment for an existing doctor and patient.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let patient = factory::create_patient(db).await?;

    let repo = AppointmentRepository::new(db);
    let appointment = repo
        .create(AppointmentParams {
            patient_id: patient.id,
            doctor_id: doctor.id,
            date: date(14),
            time: time(10),
            room_number: 3,
        })
        .await?;

    let stored = repo.get_by_id(appointment.id).await?.unwrap();
    assert_eq!(stored.doctor_id, doctor.id);
    assert_eq!(stored.patient_id, patient.id);
    assert_eq!(stored.date, date(14));
    assert_eq!(stored.time, time(10));
    assert_eq!(stored.room_number, 3);

    Ok(())
}

/// Tests creating an appointment for an unknown doctor.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn rejects_unknown_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .create(AppointmentParams {
            patient_id: patient.id,
            doctor_id: 999,
            date: date(14),
            time: time(10),
            room_number: 3,
        })
        .await;

    assert!(result.is_err());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
