use sea_orm::DatabaseConnection;

use crate::server::{
    data::patient::PatientRepository,
    error::{request::RequestError, AppError},
    model::patient::{message, Patient, PatientDraft},
    service::{check_identity, update_error},
    validation::validate_patient,
};

pub struct PatientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Patient>, AppError> {
        let repo = PatientRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Validates and inserts a patient, rejecting an email already in use
    pub async fn create(&self, draft: PatientDraft) -> Result<Patient, AppError> {
        let params = validate_patient(draft).map_err(RequestError::Invalid)?;

        let repo = PatientRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(RequestError::Conflict(message::DUPLICATE).into());
        }

        let patient = repo.create(params).await?;

        tracing::info!("Created patient {}", patient.id);

        Ok(patient)
    }

    /// Replaces every field of an existing patient without re-checking the email
    pub async fn update(&self, id: i32, draft: PatientDraft) -> Result<Patient, AppError> {
        let body_id = draft.id;
        let params = validate_patient(draft).map_err(RequestError::Invalid)?;

        check_identity(id, body_id, message::ID_MISMATCH)?;

        let repo = PatientRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        let patient = repo
            .update(id, params)
            .await
            .map_err(|err| update_error(err, message::UPDATE_FAILED))?;

        tracing::info!("Updated patient {}", id);

        Ok(patient)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PatientRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() || repo.delete(id).await? == 0 {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        tracing::info!("Deleted patient {}", id);

        Ok(())
    }
}
