//! Server-side domain models and parameter types.
//!
//! Each resource module defines three shapes:
//!
//! - the domain model, converted from the entity at the repository boundary and into
//!   a DTO at the controller boundary
//! - a draft, the request body once every non-nullable field is known to be present
//! - validated parameters, produced by the domain validators and consumed by the
//!   repositories
//!
//! Each module also exposes the client-facing messages for its resource in a
//! nested `message` module.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

/// Collects the structural error for a missing non-nullable field.
///
/// Returns the value unchanged when present so drafts can be assembled after every
/// field has been checked, reporting all missing fields at once.
pub(crate) fn required<T>(value: Option<T>, field: &str, errors: &mut Vec<String>) -> Option<T> {
    if value.is_none() {
        errors.push(format!("The {} field is required.", field));
    }

    value
}
