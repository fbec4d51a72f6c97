use super::*;

/// Tests deleting a patient then deleting again.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn deletes_patient_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;

    let repo = PatientRepository::new(db);

    assert_eq!(repo.delete(patient.id).await?, 1);
    assert_eq!(repo.delete(patient.id).await?, 0);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a patient who still has appointments.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn refuses_delete_while_referenced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_doctor, patient, _appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = PatientRepository::new(db);

    assert!(repo.delete(patient.id).await.is_err());
    assert!(repo.get_by_id(patient.id).await?.is_some());

    Ok(())
}
