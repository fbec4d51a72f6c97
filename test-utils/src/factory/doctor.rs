//! Doctor factory for creating test doctor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test doctors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let doctor = DoctorFactory::new(&db)
///     .specialty("Cardiología")
///     .build()
///     .await?;
/// ```
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    specialty: String,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Doctor {id}"` where id is auto-incremented
    /// - last_name: `"Apellido {id}"`
    /// - specialty: `"Medicina General"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Doctor {}", id),
            last_name: format!("Apellido {}", id),
            specialty: "Medicina General".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Builds and inserts the doctor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::doctor::Model)` - Created doctor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        entity::doctor::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            specialty: ActiveValue::Set(self.specialty),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a doctor with default values.
///
/// Shorthand for `DoctorFactory::new(db).build().await`.
pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db).build().await
}
