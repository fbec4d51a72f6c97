//! Patient data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::patient::{Patient, PatientParams};

pub struct PatientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every patient ordered by id
    pub async fn get_all(&self) -> Result<Vec<Patient>, DbErr> {
        let patients = entity::prelude::Patient::find()
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await?;

        Ok(patients.into_iter().map(Patient::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Patient>, DbErr> {
        let patient = entity::prelude::Patient::find_by_id(id).one(self.db).await?;

        Ok(patient.map(Patient::from_entity))
    }

    pub async fn create(&self, params: PatientParams) -> Result<Patient, DbErr> {
        let patient = entity::patient::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Patient::from_entity(patient))
    }

    /// Overwrites every field of the patient with the given id
    ///
    /// Returns `DbErr::RecordNotUpdated` when no row with that id exists.
    pub async fn update(&self, id: i32, params: PatientParams) -> Result<Patient, DbErr> {
        let patient = entity::patient::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
        }
        .update(self.db)
        .await?;

        Ok(Patient::from_entity(patient))
    }

    /// Deletes the patient with the given id, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Patient::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether any patient already uses this email
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Patient::find()
            .filter(entity::patient::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
