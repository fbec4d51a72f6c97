//! Appointment factory for creating test appointment entities.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test appointments with customizable fields.
///
/// The referenced doctor and patient must already exist. Each factory instance
/// gets a distinct default date so default appointments never share a slot.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(&db, doctor.id, patient.id)
///     .room_number(12)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    patient_id: i32,
    doctor_id: i32,
    date: NaiveDateTime,
    time: NaiveTime,
    room_number: i32,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - date: midnight of 2025-01-01 plus `{id}` days
    /// - time: `09:00:00`
    /// - room_number: `101`
    pub fn new(db: &'a DatabaseConnection, doctor_id: i32, patient_id: i32) -> Self {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();

        Self {
            db,
            patient_id,
            doctor_id,
            date: base + Duration::days(next_id() as i64),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            room_number: 101,
        }
    }

    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown doctor or patient)
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            patient_id: ActiveValue::Set(self.patient_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            room_number: ActiveValue::Set(self.room_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment with default values for the given doctor and patient.
pub async fn create_appointment(
    db: &DatabaseConnection,
    doctor_id: i32,
    patient_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, doctor_id, patient_id)
        .build()
        .await
}
