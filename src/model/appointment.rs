use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    #[serde(rename = "pacienteId")]
    pub patient_id: i32,
    #[serde(rename = "doctorId")]
    pub doctor_id: i32,
    #[serde(rename = "fecha")]
    pub date: NaiveDateTime,
    #[serde(rename = "hora")]
    pub time: NaiveTime,
    #[serde(rename = "consultorio")]
    pub room_number: i32,
}

/// Request body for creating or replacing an appointment.
///
/// `fecha` is an ISO date-time (`2025-03-14T00:00:00`) and `hora` a time of day
/// (`10:30:00`). The slot is the triple of date, time and room number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AppointmentPayloadDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "pacienteId")]
    pub patient_id: Option<i32>,
    #[serde(rename = "doctorId")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "fecha")]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "hora")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "consultorio")]
    pub room_number: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentCreatedDto {
    pub message: String,
    #[serde(rename = "idCita")]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentUpdatedDto {
    pub message: String,
    #[serde(rename = "cita")]
    pub appointment: AppointmentDto,
}
