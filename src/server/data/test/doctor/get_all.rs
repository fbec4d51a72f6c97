use super::*;

/// Tests listing doctors when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let doctors = repo.get_all().await?;

    assert!(doctors.is_empty());

    Ok(())
}

/// Tests listing doctors in id order.
///
/// Expected: Ok with every doctor, ordered by id
#[tokio::test]
async fn returns_all_doctors_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_doctor(db).await?;
    let second = factory::create_doctor(db).await?;
    let third = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let doctors = repo.get_all().await?;

    let ids: Vec<i32> = doctors.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
