use sea_orm::DatabaseConnection;

use crate::server::{
    data::appointment::AppointmentRepository,
    error::{request::RequestError, AppError},
    model::appointment::{message, Appointment, AppointmentDraft},
    service::{check_identity, update_error},
    validation::validate_appointment,
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    id_check: bool,
}

impl<'a> AppointmentService<'a> {
    /// Creates the service with the path/body id check disabled
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id_check: false,
        }
    }

    /// Enables or disables the path/body id comparison on update
    pub fn with_id_check(mut self, enabled: bool) -> Self {
        self.id_check = enabled;
        self
    }

    pub async fn get_all(&self) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Validates and books an appointment
    ///
    /// Rejects the booking when another appointment already holds the same date,
    /// time and room number. Referencing a missing doctor or patient surfaces as a
    /// database error.
    pub async fn create(&self, draft: AppointmentDraft) -> Result<Appointment, AppError> {
        let params = validate_appointment(draft).map_err(RequestError::Invalid)?;

        let repo = AppointmentRepository::new(self.db);

        if repo
            .slot_taken(params.date, params.time, params.room_number)
            .await?
        {
            return Err(RequestError::Conflict(message::DUPLICATE).into());
        }

        let appointment = repo.create(params).await?;

        tracing::info!("Created appointment {}", appointment.id);

        Ok(appointment)
    }

    /// Replaces every field of an existing appointment, room number included
    ///
    /// The slot rule is not re-checked on update.
    pub async fn update(
        &self,
        id: i32,
        draft: AppointmentDraft,
    ) -> Result<Appointment, AppError> {
        let body_id = draft.id;
        let params = validate_appointment(draft).map_err(RequestError::Invalid)?;

        if self.id_check {
            check_identity(id, body_id, message::ID_MISMATCH)?;
        }

        let repo = AppointmentRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        let appointment = repo
            .update(id, params)
            .await
            .map_err(|err| update_error(err, message::UPDATE_FAILED))?;

        tracing::info!("Updated appointment {}", id);

        Ok(appointment)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AppointmentRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() || repo.delete(id).await? == 0 {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        tracing::info!("Deleted appointment {}", id);

        Ok(())
    }
}
