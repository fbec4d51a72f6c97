use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for infrastructure failures (HTTP 500).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Single-message outcome: domain rejection, conflict, not found or delete confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Structural validation failure listing every offending field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub message: String,
    pub errores: Vec<String>,
}
