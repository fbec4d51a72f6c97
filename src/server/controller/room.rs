use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        room::{RoomCreatedDto, RoomDto, RoomPayloadDto, RoomUpdatedDto},
    },
    server::{
        error::{request::RequestError, AppError},
        model::room::{message, Room, RoomDraft},
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "Consultorio";

#[utoipa::path(
    get,
    path = "/api/Consultorio",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all().await?;

    let rooms: Vec<RoomDto> = rooms.into_iter().map(Room::into_dto).collect();

    Ok((StatusCode::OK, Json(rooms)))
}

#[utoipa::path(
    post,
    path = "/api/Consultorio",
    tag = ROOM_TAG,
    request_body = RoomPayloadDto,
    responses(
        (status = 200, description = "Room created, or the reason it was rejected", body = RoomCreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<RoomPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(RequestError::from)?;

    let room = RoomService::new(&state.db)
        .create(RoomDraft::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(RoomCreatedDto {
            message: message::CREATED.to_string(),
            id: room.id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/Consultorio/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = RoomPayloadDto,
    responses(
        (status = 200, description = "Room updated, or the reason it was rejected", body = RoomUpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<RoomPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;
    let Json(payload) = payload.map_err(RequestError::from)?;

    let room = RoomService::new(&state.db)
        .update(id, RoomDraft::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(RoomUpdatedDto {
            message: message::UPDATED.to_string(),
            room: room.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/Consultorio/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room deleted, or not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;

    RoomService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message::DELETED.to_string(),
        }),
    ))
}
