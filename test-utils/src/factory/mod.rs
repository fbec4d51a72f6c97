//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Every factory generates distinct values for the fields the
//! services check for collisions (doctor full name, patient email, appointment slot), so
//! several records can be created in one test without tripping those checks.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let doctor = factory::create_doctor(&db).await?;
//! let (doctor, patient, appointment) =
//!     factory::helpers::create_appointment_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let doctor = factory::doctor::DoctorFactory::new(&db)
//!     .first_name("Gregory")
//!     .last_name("House")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod doctor;
pub mod helpers;
pub mod patient;
pub mod room;

pub use appointment::create_appointment;
pub use doctor::create_doctor;
pub use patient::create_patient;
pub use room::create_room;
