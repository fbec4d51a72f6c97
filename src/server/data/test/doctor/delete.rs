use super::*;

/// Tests deleting an existing doctor.
///
/// Expected: Ok(1) with doctor removed from database
#[tokio::test]
async fn deletes_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let deleted = repo.delete(doctor.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(doctor.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);

    assert_eq!(repo.delete(999).await?, 0);

    Ok(())
}

/// Tests deleting a doctor who still has appointments.
///
/// The appointment foreign key has no cascade, so the store refuses the delete.
///
/// Expected: Err(DbErr) with doctor and appointment left in place
#[tokio::test]
async fn refuses_delete_while_referenced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (doctor, _patient, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.delete(doctor.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(doctor.id).await?.is_some());
    assert!(entity::prelude::Appointment::find_by_id(appointment.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
