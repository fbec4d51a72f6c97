//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    number: i32,
    floor: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - number: auto-incremented
    /// - floor: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            number: next_id() as i32,
            floor: 1,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            number: ActiveValue::Set(self.number),
            floor: ActiveValue::Set(self.floor),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
