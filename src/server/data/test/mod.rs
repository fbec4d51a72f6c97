mod appointment;
mod doctor;
mod patient;
mod room;
