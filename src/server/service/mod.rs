//! Business logic layer.
//!
//! Services sit between controllers and repositories. Each write runs the same
//! pipeline: domain validation, then (on update) the identity check and existence
//! lookup, then (on create) the collision check, then the write itself. Business
//! rejections are returned as `RequestError` inside `AppError` so the controller can
//! render them as HTTP 200 bodies.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

#[cfg(test)]
mod test;

use sea_orm::DbErr;

use crate::server::error::{request::RequestError, AppError};

/// Rejects an update whose body id disagrees with the path id.
///
/// A body without an id is accepted.
pub(crate) fn check_identity(
    path_id: i32,
    body_id: Option<i32>,
    message: &'static str,
) -> Result<(), RequestError> {
    match body_id {
        Some(body_id) if body_id != path_id => Err(RequestError::IdMismatch(message)),
        _ => Ok(()),
    }
}

/// Maps a failed update write to the resource's generic failure message.
///
/// `RecordNotUpdated` means the row disappeared after the existence lookup. The
/// write is not retried. Any other database error stays an internal error.
pub(crate) fn update_error(err: DbErr, message: &'static str) -> AppError {
    match err {
        DbErr::RecordNotUpdated => {
            tracing::warn!("Update matched no rows: {}", message);
            RequestError::UpdateFailed(message).into()
        }
        err => err.into(),
    }
}
