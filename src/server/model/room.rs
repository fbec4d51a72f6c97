//! Domain & parameter models for room operations

use crate::model::room::{RoomDto, RoomPayloadDto};

pub mod message {
    pub const CREATED: &str = "Consultorio creado correctamente.";
    pub const UPDATED: &str = "Consultorio actualizado exitosamente.";
    pub const DELETED: &str = "Consultorio eliminado correctamente.";
    pub const NOT_FOUND: &str = "Consultorio no encontrado.";
    pub const ID_MISMATCH: &str = "El ID del consultorio no coincide.";
    pub const UPDATE_FAILED: &str = "Error al actualizar el consultorio.";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub number: i32,
    pub floor: i32,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            floor: entity.floor,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            number: self.number,
            floor: self.floor,
        }
    }
}

/// Room request body. Both fields are nullable on the wire and checked by the
/// domain validator, so building a draft never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub id: Option<i32>,
    pub number: Option<i32>,
    pub floor: Option<i32>,
}

impl RoomDraft {
    pub fn from_dto(dto: RoomPayloadDto) -> Self {
        Self {
            id: dto.id,
            number: dto.number,
            floor: dto.floor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomParams {
    pub number: i32,
    pub floor: i32,
}
