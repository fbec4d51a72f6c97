//! Domain & parameter models for doctor operations

use crate::{
    model::doctor::{DoctorDto, DoctorPayloadDto},
    server::{error::request::RequestError, model::required},
};

pub mod message {
    pub const CREATED: &str = "Médico creado correctamente.";
    pub const UPDATED: &str = "Médico actualizado exitosamente.";
    pub const DELETED: &str = "Médico eliminado correctamente.";
    pub const NOT_FOUND: &str = "Médico no encontrado.";
    pub const ID_MISMATCH: &str = "El ID del médico no coincide.";
    pub const UPDATE_FAILED: &str = "Error al actualizar el médico.";
    pub const DUPLICATE: &str = "Ya existe un médico con ese nombre y apellido.";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn from_entity(entity: entity::doctor::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            specialty: entity.specialty,
        }
    }

    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty,
        }
    }
}

/// Doctor request body with every required field present.
///
/// Values are not yet validated: names may still be empty or too long.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDraft {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl DoctorDraft {
    /// Checks that the body carries every non-nullable field.
    ///
    /// # Returns
    /// - `Ok(DoctorDraft)` - All required fields present
    /// - `Err(RequestError::Structural)` - One entry per missing field
    pub fn from_dto(dto: DoctorPayloadDto) -> Result<Self, RequestError> {
        let mut errors = Vec::new();

        let first_name = required(dto.first_name, "nombre", &mut errors);
        let last_name = required(dto.last_name, "apellido", &mut errors);
        let specialty = required(dto.specialty, "especialidad", &mut errors);

        match (first_name, last_name, specialty) {
            (Some(first_name), Some(last_name), Some(specialty)) => Ok(Self {
                id: dto.id,
                first_name,
                last_name,
                specialty,
            }),
            _ => Err(RequestError::Structural(errors)),
        }
    }
}

/// Validated doctor fields, used for both insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorParams {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_missing_field() {
        let result = DoctorDraft::from_dto(DoctorPayloadDto {
            specialty: Some("Cardiología".to_string()),
            ..Default::default()
        });

        assert_eq!(
            result,
            Err(RequestError::Structural(vec![
                "The nombre field is required.".to_string(),
                "The apellido field is required.".to_string(),
            ]))
        );
    }

    #[test]
    fn keeps_empty_strings_for_the_domain_validator() {
        let draft = DoctorDraft::from_dto(DoctorPayloadDto {
            id: Some(3),
            first_name: Some(String::new()),
            last_name: Some("House".to_string()),
            specialty: Some("Diagnóstico".to_string()),
        })
        .unwrap();

        assert_eq!(draft.id, Some(3));
        assert!(draft.first_name.is_empty());
    }
}
