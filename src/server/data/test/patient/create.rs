use super::*;

/// Tests creating a patient and listing it back.
///
/// Expected: Ok with the patient present in the list
#[tokio::test]
async fn creates_and_lists_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatientRepository::new(db);
    let patient = repo.create(params("ana@example.com")).await?;

    assert!(patient.id > 0);

    let patients = repo.get_all().await?;
    assert_eq!(patients, vec![patient]);

    Ok(())
}

/// Tests storing an address at the 500 character limit.
///
/// Expected: Ok with the full address persisted
#[tokio::test]
async fn stores_long_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut long = params("largo@example.com");
    long.address = "d".repeat(500);

    let repo = PatientRepository::new(db);
    let patient = repo.create(long).await?;

    let stored = repo.get_by_id(patient.id).await?.unwrap();
    assert_eq!(stored.address.len(), 500);

    Ok(())
}
