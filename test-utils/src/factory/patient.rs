//! Patient factory for creating test patient entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patients with customizable fields.
///
/// The default email is unique per factory instance.
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    address: String,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Paciente {id}"`
    /// - last_name: `"Apellido {id}"`
    /// - email: `"paciente{id}@example.com"`
    /// - address: `"Calle {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Paciente {}", id),
            last_name: format!("Apellido {}", id),
            email: format!("paciente{}@example.com", id),
            address: format!("Calle {}", id),
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

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the patient entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::patient::Model)` - Created patient entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        entity::patient::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patient with default values.
pub async fn create_patient(db: &DatabaseConnection) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db).build().await
}
