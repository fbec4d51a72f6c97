use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    #[serde(rename = "numero")]
    pub number: i32,
    #[serde(rename = "piso")]
    pub floor: i32,
}

/// Request body for creating or replacing a room.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RoomPayloadDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "numero")]
    pub number: Option<i32>,
    #[serde(rename = "piso")]
    pub floor: Option<i32>,
}

/// Room creation keeps the plain `id` key existing clients read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomCreatedDto {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomUpdatedDto {
    pub message: String,
    #[serde(rename = "consultorio")]
    pub room: RoomDto,
}
