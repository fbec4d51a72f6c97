//! SeaORM entities for the clinic schema.
//!
//! One module per table. The tables are created by the `migration` crate; the
//! definitions here must stay in sync with it.

pub mod prelude;

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;
