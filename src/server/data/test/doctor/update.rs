use super::*;

/// Tests overwriting every field of an existing doctor.
///
/// Expected: Ok with updated doctor, id unchanged
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let updated = repo
        .update(doctor.id, params("Lisa", "Cuddy", "Endocrinología"))
        .await?;

    assert_eq!(updated.id, doctor.id);
    assert_eq!(updated.first_name, "Lisa");
    assert_eq!(updated.last_name, "Cuddy");
    assert_eq!(updated.specialty, "Endocrinología");

    let stored = entity::prelude::Doctor::find_by_id(doctor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.first_name, "Lisa");

    Ok(())
}

/// Tests updating an id that has no row.
///
/// Expected: Err(DbErr::RecordNotUpdated) and no row created
#[tokio::test]
async fn fails_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let result = repo.update(999, params("Lisa", "Cuddy", "Endocrinología")).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that renaming onto an existing full name is allowed.
///
/// Expected: Ok, two doctors share the same name
#[tokio::test]
async fn allows_duplicate_full_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_doctor(db).await?;
    let other = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    repo.update(
        other.id,
        params(&existing.first_name, &existing.last_name, "Neurología"),
    )
    .await?;

    let doctors = repo.get_all().await?;
    assert_eq!(doctors[0].first_name, doctors[1].first_name);
    assert_eq!(doctors[0].last_name, doctors[1].last_name);

    Ok(())
}
