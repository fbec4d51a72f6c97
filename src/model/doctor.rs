use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorDto {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
}

/// Request body for creating or replacing a doctor.
///
/// Every field is optional at the JSON level so that missing fields surface as
/// validation messages instead of extractor rejections. `id` is only read on
/// update, where it must match the path id when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DoctorPayloadDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    #[serde(rename = "especialidad")]
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorCreatedDto {
    pub message: String,
    #[serde(rename = "idMedico")]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorUpdatedDto {
    pub message: String,
    #[serde(rename = "medico")]
    pub doctor: DoctorDto,
}
