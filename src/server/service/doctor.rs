use sea_orm::DatabaseConnection;

use crate::server::{
    data::doctor::DoctorRepository,
    error::{request::RequestError, AppError},
    model::doctor::{message, Doctor, DoctorDraft},
    service::{check_identity, update_error},
    validation::validate_doctor,
};

pub struct DoctorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Doctor>, AppError> {
        let repo = DoctorRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Validates and inserts a doctor, rejecting an existing first + last name pair
    pub async fn create(&self, draft: DoctorDraft) -> Result<Doctor, AppError> {
        let params = validate_doctor(draft).map_err(RequestError::Invalid)?;

        let repo = DoctorRepository::new(self.db);

        if repo
            .exists_with_full_name(&params.first_name, &params.last_name)
            .await?
        {
            return Err(RequestError::Conflict(message::DUPLICATE).into());
        }

        let doctor = repo.create(params).await?;

        tracing::info!("Created doctor {}", doctor.id);

        Ok(doctor)
    }

    /// Replaces every field of an existing doctor
    ///
    /// The full-name rule is not re-checked, so a doctor may be renamed onto an
    /// existing name.
    pub async fn update(&self, id: i32, draft: DoctorDraft) -> Result<Doctor, AppError> {
        let body_id = draft.id;
        let params = validate_doctor(draft).map_err(RequestError::Invalid)?;

        check_identity(id, body_id, message::ID_MISMATCH)?;

        let repo = DoctorRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        let doctor = repo
            .update(id, params)
            .await
            .map_err(|err| update_error(err, message::UPDATE_FAILED))?;

        tracing::info!("Updated doctor {}", id);

        Ok(doctor)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DoctorRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() || repo.delete(id).await? == 0 {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        tracing::info!("Deleted doctor {}", id);

        Ok(())
    }
}
