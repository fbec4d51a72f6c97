//! Domain validators.
//!
//! Pure functions that consume a draft and either return the validated parameters
//! or the first failing rule's message. Rules run in a fixed order and stop at the
//! first failure. Lengths are counted in characters, not bytes.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

pub use appointment::validate_appointment;
pub use doctor::validate_doctor;
pub use patient::validate_patient;
pub use room::validate_room;

/// Maximum length of names, specialty and email.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a patient address.
pub const MAX_ADDRESS_LENGTH: usize = 500;

pub(crate) fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}
