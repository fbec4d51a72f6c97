use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::room::{Room, RoomParams};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(room.map(Room::from_entity))
    }

    pub async fn create(&self, params: RoomParams) -> Result<Room, DbErr> {
        let room = entity::room::ActiveModel {
            number: ActiveValue::Set(params.number),
            floor: ActiveValue::Set(params.floor),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(room))
    }

    pub async fn update(&self, id: i32, params: RoomParams) -> Result<Room, DbErr> {
        let room = entity::room::ActiveModel {
            id: ActiveValue::Unchanged(id),
            number: ActiveValue::Set(params.number),
            floor: ActiveValue::Set(params.floor),
        }
        .update(self.db)
        .await?;

        Ok(Room::from_entity(room))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
