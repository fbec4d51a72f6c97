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
        appointment::{
            AppointmentCreatedDto, AppointmentDto, AppointmentPayloadDto, AppointmentUpdatedDto,
        },
    },
    server::{
        error::{request::RequestError, AppError},
        model::appointment::{message, Appointment, AppointmentDraft},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "Cita";

#[utoipa::path(
    get,
    path = "/api/Cita",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "All appointments", body = Vec<AppointmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = AppointmentService::new(&state.db).get_all().await?;

    let appointments: Vec<AppointmentDto> = appointments
        .into_iter()
        .map(Appointment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(appointments)))
}

/// Book an appointment.
///
/// Rejected when another appointment holds the same date, time and room number.
/// An unknown doctor or patient id is a database error (500).
#[utoipa::path(
    post,
    path = "/api/Cita",
    tag = APPOINTMENT_TAG,
    request_body = AppointmentPayloadDto,
    responses(
        (status = 200, description = "Appointment created, or the reason it was rejected", body = AppointmentCreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<AppointmentPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(RequestError::from)?;
    let draft = AppointmentDraft::from_dto(payload)?;

    let appointment = AppointmentService::new(&state.db).create(draft).await?;

    Ok((
        StatusCode::OK,
        Json(AppointmentCreatedDto {
            message: message::CREATED.to_string(),
            id: appointment.id,
        }),
    ))
}

/// Replace every field of an appointment.
///
/// The body `id` is only compared with the path id when `APPOINTMENT_ID_CHECK`
/// is enabled.
#[utoipa::path(
    put,
    path = "/api/Cita/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = AppointmentPayloadDto,
    responses(
        (status = 200, description = "Appointment updated, or the reason it was rejected", body = AppointmentUpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AppointmentPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;
    let Json(payload) = payload.map_err(RequestError::from)?;
    let draft = AppointmentDraft::from_dto(payload)?;

    let appointment = AppointmentService::new(&state.db)
        .with_id_check(state.appointment_id_check)
        .update(id, draft)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AppointmentUpdatedDto {
            message: message::UPDATED.to_string(),
            appointment: appointment.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/Cita/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment deleted, or not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;

    AppointmentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message::DELETED.to_string(),
        }),
    ))
}
