use super::*;

/// Tests creating a doctor.
///
/// Verifies that the repository inserts the doctor, assigns a positive id and
/// stores every field as given.
///
/// Expected: Ok with created doctor
#[tokio::test]
async fn creates_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let doctor = repo
        .create(params("Gregory", "House", "Diagnóstico"))
        .await?;

    assert!(doctor.id > 0);
    assert_eq!(doctor.first_name, "Gregory");
    assert_eq!(doctor.last_name, "House");
    assert_eq!(doctor.specialty, "Diagnóstico");

    let stored = entity::prelude::Doctor::find_by_id(doctor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.specialty, "Diagnóstico");

    Ok(())
}

/// Tests that ids are assigned incrementally.
///
/// Expected: Ok with distinct, increasing ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let first = repo.create(params("Ana", "Ruiz", "Pediatría")).await?;
    let second = repo.create(params("Luis", "Mora", "Pediatría")).await?;

    assert!(second.id > first.id);

    Ok(())
}
