//! Database repository layer for all clinic resources.
//!
//! Each repository wraps a borrowed `DatabaseConnection`, runs its queries through the
//! SeaORM entities and converts the resulting entity models into domain models. Errors
//! are returned as `DbErr` and mapped to application errors by the service layer.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

#[cfg(test)]
mod test;
