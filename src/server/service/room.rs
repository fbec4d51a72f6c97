use sea_orm::DatabaseConnection;

use crate::server::{
    data::room::RoomRepository,
    error::{request::RequestError, AppError},
    model::room::{message, Room, RoomDraft},
    service::{check_identity, update_error},
    validation::validate_room,
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Validates and inserts a room. Rooms have no collision rule.
    pub async fn create(&self, draft: RoomDraft) -> Result<Room, AppError> {
        let params = validate_room(draft).map_err(RequestError::Invalid)?;

        let room = RoomRepository::new(self.db).create(params).await?;

        tracing::info!("Created room {}", room.id);

        Ok(room)
    }

    pub async fn update(&self, id: i32, draft: RoomDraft) -> Result<Room, AppError> {
        let body_id = draft.id;
        let params = validate_room(draft).map_err(RequestError::Invalid)?;

        check_identity(id, body_id, message::ID_MISMATCH)?;

        let repo = RoomRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        let room = repo
            .update(id, params)
            .await
            .map_err(|err| update_error(err, message::UPDATE_FAILED))?;

        tracing::info!("Updated room {}", id);

        Ok(room)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() || repo.delete(id).await? == 0 {
            return Err(RequestError::NotFound(message::NOT_FOUND).into());
        }

        tracing::info!("Deleted room {}", id);

        Ok(())
    }
}
