use super::*;

/// Tests detecting an email already in use.
///
/// Expected: Ok(true) for the used email, Ok(false) otherwise
#[tokio::test]
async fn detects_used_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::patient::PatientFactory::new(db)
        .email("ana@example.com")
        .build()
        .await?;

    let repo = PatientRepository::new(db);

    assert!(repo.email_exists("ana@example.com").await?);
    assert!(!repo.email_exists("otra@example.com").await?);

    Ok(())
}
