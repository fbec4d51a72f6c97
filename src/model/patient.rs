use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDto {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "correo")]
    pub email: String,
}

/// Request body for creating or replacing a patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatientPayloadDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "correo")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientCreatedDto {
    pub message: String,
    #[serde(rename = "idPaciente")]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientUpdatedDto {
    pub message: String,
    #[serde(rename = "paciente")]
    pub patient: PatientDto,
}
