use super::*;

/// Tests overwriting every field, room number included.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (doctor, patient, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other_doctor = factory::create_doctor(db).await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            appointment.id,
            AppointmentParams {
                patient_id: patient.id,
                doctor_id: other_doctor.id,
                date: date(20),
                time: time(16),
                room_number: 9,
            },
        )
        .await?;

    assert_eq!(updated.id, appointment.id);
    assert_ne!(updated.doctor_id, doctor.id);
    assert_eq!(updated.date, date(20));
    assert_eq!(updated.time, time(16));
    assert_eq!(updated.room_number, 9);

    Ok(())
}

/// Tests updating an id that has no row.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let patient = factory::create_patient(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(
            55,
            AppointmentParams {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: date(20),
                time: time(16),
                room_number: 9,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
