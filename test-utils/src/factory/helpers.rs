//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an appointment together with the doctor and patient it references.
///
/// All entities are created with default values. Use the individual factories
/// when a test needs specific field values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((doctor, patient, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::doctor::Model,
        entity::patient::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let doctor = crate::factory::doctor::create_doctor(db).await?;
    let patient = crate::factory::patient::create_patient(db).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, doctor.id, patient.id).await?;

    Ok((doctor, patient, appointment))
}
