use super::*;

/// Tests overwriting every field of an existing patient.
///
/// Expected: Ok with updated patient
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patient = factory::create_patient(db).await?;

    let repo = PatientRepository::new(db);
    let updated = repo.update(patient.id, params("nuevo@example.com")).await?;

    assert_eq!(updated.id, patient.id);
    assert_eq!(updated.email, "nuevo@example.com");
    assert_eq!(updated.address, "Av. Central 123");

    Ok(())
}

/// Tests that update may reuse another patient's email.
///
/// Expected: Ok with both patients sharing the email
#[tokio::test]
async fn allows_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_patient(db).await?;
    let other = factory::create_patient(db).await?;

    let repo = PatientRepository::new(db);
    let updated = repo.update(other.id, params(&existing.email)).await?;

    assert_eq!(updated.email, existing.email);

    Ok(())
}

/// Tests updating an id that has no row.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatientRepository::new(db);
    let result = repo.update(42, params("nadie@example.com")).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
