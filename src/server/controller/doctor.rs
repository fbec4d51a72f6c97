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
        doctor::{DoctorCreatedDto, DoctorDto, DoctorPayloadDto, DoctorUpdatedDto},
    },
    server::{
        error::{request::RequestError, AppError},
        model::doctor::{message, Doctor, DoctorDraft},
        service::doctor::DoctorService,
        state::AppState,
    },
};

/// Tag for grouping doctor endpoints in OpenAPI documentation
pub static DOCTOR_TAG: &str = "Medico";

/// List every doctor.
///
/// # Returns
/// - `200 OK` - Array of doctors ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/Medico",
    tag = DOCTOR_TAG,
    responses(
        (status = 200, description = "All doctors", body = Vec<DoctorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let doctors = DoctorService::new(&state.db).get_all().await?;

    let doctors: Vec<DoctorDto> = doctors.into_iter().map(Doctor::into_dto).collect();

    Ok((StatusCode::OK, Json(doctors)))
}

/// Create a doctor.
///
/// Rejects bodies with missing fields, fields that fail validation, and a first +
/// last name pair that already exists. Rejections are reported in the body with
/// status 200.
///
/// # Returns
/// - `200 OK` - `{message, idMedico}` on success, otherwise `{message}` or
///   `{message, errores}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/Medico",
    tag = DOCTOR_TAG,
    request_body = DoctorPayloadDto,
    responses(
        (status = 200, description = "Doctor created, or the reason it was rejected", body = DoctorCreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    payload: Result<Json<DoctorPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(RequestError::from)?;
    let draft = DoctorDraft::from_dto(payload)?;

    let doctor = DoctorService::new(&state.db).create(draft).await?;

    Ok((
        StatusCode::OK,
        Json(DoctorCreatedDto {
            message: message::CREATED.to_string(),
            id: doctor.id,
        }),
    ))
}

/// Replace every field of a doctor.
///
/// When the body carries an `id` it must equal the path id.
///
/// # Returns
/// - `200 OK` - `{message, medico}` on success, otherwise `{message}` or
///   `{message, errores}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/Medico/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    request_body = DoctorPayloadDto,
    responses(
        (status = 200, description = "Doctor updated, or the reason it was rejected", body = DoctorUpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<DoctorPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;
    let Json(payload) = payload.map_err(RequestError::from)?;
    let draft = DoctorDraft::from_dto(payload)?;

    let doctor = DoctorService::new(&state.db).update(id, draft).await?;

    Ok((
        StatusCode::OK,
        Json(DoctorUpdatedDto {
            message: message::UPDATED.to_string(),
            doctor: doctor.into_dto(),
        }),
    ))
}

/// Delete a doctor.
///
/// # Returns
/// - `200 OK` - Deleted or not-found message
/// - `500 Internal Server Error` - Database error, including a doctor that still
///   has appointments
#[utoipa::path(
    delete,
    path = "/api/Medico/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor deleted, or not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;

    DoctorService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message::DELETED.to_string(),
        }),
    ))
}
