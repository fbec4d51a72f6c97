//! Doctor data repository for database operations
//!
//! Provides the `DoctorRepository` for listing, creating, replacing and deleting
//! doctors, plus the full-name lookup used by the duplicate check on create.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::doctor::{Doctor, DoctorParams};

/// Repository providing database operations for doctor management.
pub struct DoctorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorRepository<'a> {
    /// Creates a new DoctorRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DoctorRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every doctor ordered by id
    pub async fn get_all(&self) -> Result<Vec<Doctor>, DbErr> {
        let doctors = entity::prelude::Doctor::find()
            .order_by_asc(entity::doctor::Column::Id)
            .all(self.db)
            .await?;

        Ok(doctors.into_iter().map(Doctor::from_entity).collect())
    }

    /// Gets a doctor by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Doctor>, DbErr> {
        let doctor = entity::prelude::Doctor::find_by_id(id).one(self.db).await?;

        Ok(doctor.map(Doctor::from_entity))
    }

    /// Inserts a new doctor
    ///
    /// # Arguments
    /// - `params` - Validated doctor fields
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The created doctor with its assigned id
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: DoctorParams) -> Result<Doctor, DbErr> {
        let doctor = entity::doctor::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            specialty: ActiveValue::Set(params.specialty),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Doctor::from_entity(doctor))
    }

    /// Overwrites every field of the doctor with the given id
    ///
    /// Issues a single `UPDATE` keyed on the id without re-reading the row first.
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The updated doctor
    /// - `Err(DbErr::RecordNotUpdated)` - No row with that id exists anymore
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, id: i32, params: DoctorParams) -> Result<Doctor, DbErr> {
        let doctor = entity::doctor::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            specialty: ActiveValue::Set(params.specialty),
        }
        .update(self.db)
        .await?;

        Ok(Doctor::from_entity(doctor))
    }

    /// Deletes the doctor with the given id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the id does not exist)
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   doctor still has appointments
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Doctor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a doctor with exactly this first and last name exists
    ///
    /// Comparison is case-sensitive.
    pub async fn exists_with_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::FirstName.eq(first_name))
            .filter(entity::doctor::Column::LastName.eq(last_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
