//! Domain & parameter models for appointment operations
//!
//! An appointment occupies a slot: the exact triple of date, time and room number.
//! The room number is a plain integer and is not checked against the room table.

use chrono::{NaiveDateTime, NaiveTime};

use crate::{
    model::appointment::{AppointmentDto, AppointmentPayloadDto},
    server::{error::request::RequestError, model::required},
};

pub mod message {
    pub const CREATED: &str = "Cita creada correctamente.";
    pub const UPDATED: &str = "Cita actualizada exitosamente.";
    pub const DELETED: &str = "Cita eliminada correctamente.";
    pub const NOT_FOUND: &str = "Cita no encontrada.";
    pub const ID_MISMATCH: &str = "El ID de la cita no coincide.";
    pub const UPDATE_FAILED: &str = "Error al actualizar la cita.";
    pub const DUPLICATE: &str = "Ya existe una cita en esa fecha y hora en el mismo consultorio.";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub date: NaiveDateTime,
    pub time: NaiveTime,
    pub room_number: i32,
}

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            patient_id: entity.patient_id,
            doctor_id: entity.doctor_id,
            date: entity.date,
            time: entity.time,
            room_number: entity.room_number,
        }
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            date: self.date,
            time: self.time,
            room_number: self.room_number,
        }
    }
}

/// Appointment request body with references and room number present.
///
/// `date` and `time` stay optional for the domain validator.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub id: Option<i32>,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub date: Option<NaiveDateTime>,
    pub time: Option<NaiveTime>,
    pub room_number: i32,
}

impl AppointmentDraft {
    pub fn from_dto(dto: AppointmentPayloadDto) -> Result<Self, RequestError> {
        let mut errors = Vec::new();

        let patient_id = required(dto.patient_id, "pacienteId", &mut errors);
        let doctor_id = required(dto.doctor_id, "doctorId", &mut errors);
        let room_number = required(dto.room_number, "consultorio", &mut errors);

        match (patient_id, doctor_id, room_number) {
            (Some(patient_id), Some(doctor_id), Some(room_number)) => Ok(Self {
                id: dto.id,
                patient_id,
                doctor_id,
                date: dto.date,
                time: dto.time,
                room_number,
            }),
            _ => Err(RequestError::Structural(errors)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentParams {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub date: NaiveDateTime,
    pub time: NaiveTime,
    pub room_number: i32,
}
