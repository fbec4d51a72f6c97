//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. Business outcomes
//! (validation failures, conflicts, missing records) travel as `RequestError`, which
//! renders its own HTTP 200 body; everything else is an infrastructure failure that
//! is logged and answered with a generic 500.

pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, request::RequestError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Business outcome reported to the client in the response body.
    ///
    /// Delegates to `RequestError::into_response()`, which always answers 200.
    #[error(transparent)]
    RequestErr(#[from] RequestError),

    /// Database operation error from SeaORM.
    ///
    /// Covers connection failures and foreign key violations alike. Results in
    /// 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::RequestErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body so
/// driver or constraint details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
