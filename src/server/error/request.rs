//! Business outcomes reported inside a successful HTTP response.
//!
//! The clinic clients read the logical result from the JSON body and ignore the
//! status code, so every variant here renders as HTTP 200. Structural failures
//! list every offending field under `errores`; every other variant carries the
//! single message shown to the user.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{MessageDto, ValidationErrorsDto};

/// Headline message for structural validation failures.
pub const VALIDATION_ERRORS: &str = "Errores de validación";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Body could not be read as the expected shape or lacks required fields.
    #[error("Errores de validación")]
    Structural(Vec<String>),

    /// Domain validator rejected a field value.
    #[error("{0}")]
    Invalid(&'static str),

    /// Create would duplicate an existing doctor, patient or appointment slot.
    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    /// Path id and body id disagree on update.
    #[error("{0}")]
    IdMismatch(&'static str),

    /// Record vanished between lookup and write.
    #[error("{0}")]
    UpdateFailed(&'static str),
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Structural(vec![rejection.body_text()])
    }
}

impl From<PathRejection> for RequestError {
    fn from(rejection: PathRejection) -> Self {
        Self::Structural(vec![rejection.body_text()])
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            Self::Structural(errores) => {
                tracing::debug!("Rejected request body: {:?}", errores);

                (
                    StatusCode::OK,
                    Json(ValidationErrorsDto {
                        message: VALIDATION_ERRORS.to_string(),
                        errores,
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("Request outcome: {}", err);

                (
                    StatusCode::OK,
                    Json(MessageDto {
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
