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
        patient::{PatientCreatedDto, PatientDto, PatientPayloadDto, PatientUpdatedDto},
    },
    server::{
        error::{request::RequestError, AppError},
        model::patient::{message, Patient, PatientDraft},
        service::patient::PatientService,
        state::AppState,
    },
};

/// Tag for grouping patient endpoints in OpenAPI documentation
pub static PATIENT_TAG: &str = "Paciente";

#[utoipa::path(
    get,
    path = "/api/Paciente",
    tag = PATIENT_TAG,
    responses(
        (status = 200, description = "All patients", body = Vec<PatientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let patients = PatientService::new(&state.db).get_all().await?;

    let patients: Vec<PatientDto> = patients.into_iter().map(Patient::into_dto).collect();

    Ok((StatusCode::OK, Json(patients)))
}

/// Create a patient.
///
/// The email must not belong to another patient.
#[utoipa::path(
    post,
    path = "/api/Paciente",
    tag = PATIENT_TAG,
    request_body = PatientPayloadDto,
    responses(
        (status = 200, description = "Patient created, or the reason it was rejected", body = PatientCreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<PatientPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(RequestError::from)?;
    let draft = PatientDraft::from_dto(payload)?;

    let patient = PatientService::new(&state.db).create(draft).await?;

    Ok((
        StatusCode::OK,
        Json(PatientCreatedDto {
            message: message::CREATED.to_string(),
            id: patient.id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/Paciente/{id}",
    tag = PATIENT_TAG,
    params(
        ("id" = i32, Path, description = "Patient ID")
    ),
    request_body = PatientPayloadDto,
    responses(
        (status = 200, description = "Patient updated, or the reason it was rejected", body = PatientUpdatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patient(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatientPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;
    let Json(payload) = payload.map_err(RequestError::from)?;
    let draft = PatientDraft::from_dto(payload)?;

    let patient = PatientService::new(&state.db).update(id, draft).await?;

    Ok((
        StatusCode::OK,
        Json(PatientUpdatedDto {
            message: message::UPDATED.to_string(),
            patient: patient.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/Paciente/{id}",
    tag = PATIENT_TAG,
    params(
        ("id" = i32, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Patient deleted, or not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(RequestError::from)?;

    PatientService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message::DELETED.to_string(),
        }),
    ))
}
