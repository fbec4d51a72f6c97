pub use super::appointment::Entity as Appointment;
pub use super::doctor::Entity as Doctor;
pub use super::patient::Entity as Patient;
pub use super::room::Entity as Room;
