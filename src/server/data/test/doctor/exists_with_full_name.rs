use super::*;

/// Tests finding an exact first and last name match.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_exact_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::doctor::DoctorFactory::new(db)
        .first_name("Gregory")
        .last_name("House")
        .build()
        .await?;

    let repo = DoctorRepository::new(db);

    assert!(repo.exists_with_full_name("Gregory", "House").await?);

    Ok(())
}

/// Tests that a partial match does not count.
///
/// Expected: Ok(false) when only one of the two names matches
#[tokio::test]
async fn ignores_partial_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::doctor::DoctorFactory::new(db)
        .first_name("Gregory")
        .last_name("House")
        .build()
        .await?;

    let repo = DoctorRepository::new(db);

    assert!(!repo.exists_with_full_name("Gregory", "Wilson").await?);
    assert!(!repo.exists_with_full_name("James", "House").await?);

    Ok(())
}

/// Tests that the comparison is case-sensitive.
///
/// Expected: Ok(false) for a differently-cased name
#[tokio::test]
async fn is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::doctor::DoctorFactory::new(db)
        .first_name("Gregory")
        .last_name("House")
        .build()
        .await?;

    let repo = DoctorRepository::new(db);

    assert!(!repo.exists_with_full_name("gregory", "house").await?);

    Ok(())
}
