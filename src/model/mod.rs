//! Wire-level data transfer objects.
//!
//! These types define the JSON shapes exchanged with clients. Field names follow the
//! Spanish camelCase contract the clinic front-ends were written against, so every
//! field carries an explicit serde rename. Server-side domain models live in
//! `server::model` and convert into these DTOs at the controller boundary.

pub mod api;
pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;
