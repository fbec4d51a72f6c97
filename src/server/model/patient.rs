//! Domain & parameter models for patient operations

use crate::{
    model::patient::{PatientDto, PatientPayloadDto},
    server::{error::request::RequestError, model::required},
};

pub mod message {
    pub const CREATED: &str = "Paciente creado correctamente.";
    pub const UPDATED: &str = "Paciente actualizado exitosamente.";
    pub const DELETED: &str = "Paciente eliminado correctamente.";
    pub const NOT_FOUND: &str = "Paciente no encontrado.";
    pub const ID_MISMATCH: &str = "El ID del paciente no coincide.";
    pub const UPDATE_FAILED: &str = "Error al actualizar el paciente.";
    pub const DUPLICATE: &str = "Ya existe un paciente con ese correo.";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}

impl Patient {
    pub fn from_entity(entity: entity::patient::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> PatientDto {
        PatientDto {
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            email: self.email,
        }
    }
}

/// Patient request body with every non-nullable field present.
///
/// `address` stays optional here: a null address is a domain error with its own
/// message rather than a structural one.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientDraft {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
}

impl PatientDraft {
    pub fn from_dto(dto: PatientPayloadDto) -> Result<Self, RequestError> {
        let mut errors = Vec::new();

        let first_name = required(dto.first_name, "nombre", &mut errors);
        let last_name = required(dto.last_name, "apellido", &mut errors);
        let email = required(dto.email, "correo", &mut errors);

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(Self {
                id: dto.id,
                first_name,
                last_name,
                email,
                address: dto.address,
            }),
            _ => Err(RequestError::Structural(errors)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}
