//! Appointment data repository for database operations
//!
//! Besides CRUD, provides the slot lookup backing the double-booking check: two
//! appointments collide only when date, time and room number are all equal.

use chrono::{NaiveDateTime, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{Appointment, AppointmentParams};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every appointment ordered by id
    pub async fn get_all(&self) -> Result<Vec<Appointment>, DbErr> {
        let appointments = entity::prelude::Appointment::find()
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?;

        Ok(appointments
            .into_iter()
            .map(Appointment::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let appointment = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(appointment.map(Appointment::from_entity))
    }

    /// Inserts a new appointment
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment with its assigned id
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   doctor or patient does not exist
    pub async fn create(&self, params: AppointmentParams) -> Result<Appointment, DbErr> {
        let appointment = entity::appointment::ActiveModel {
            patient_id: ActiveValue::Set(params.patient_id),
            doctor_id: ActiveValue::Set(params.doctor_id),
            date: ActiveValue::Set(params.date),
            time: ActiveValue::Set(params.time),
            room_number: ActiveValue::Set(params.room_number),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(appointment))
    }

    /// Overwrites every field of the appointment with the given id
    ///
    /// Returns `DbErr::RecordNotUpdated` when no row with that id exists.
    pub async fn update(&self, id: i32, params: AppointmentParams) -> Result<Appointment, DbErr> {
        let appointment = entity::appointment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            patient_id: ActiveValue::Set(params.patient_id),
            doctor_id: ActiveValue::Set(params.doctor_id),
            date: ActiveValue::Set(params.date),
            time: ActiveValue::Set(params.time),
            room_number: ActiveValue::Set(params.room_number),
        }
        .update(self.db)
        .await?;

        Ok(Appointment::from_entity(appointment))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether an appointment already occupies this exact slot
    pub async fn slot_taken(
        &self,
        date: NaiveDateTime,
        time: NaiveTime,
        room_number: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Date.eq(date))
            .filter(entity::appointment::Column::Time.eq(time))
            .filter(entity::appointment::Column::RoomNumber.eq(room_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
