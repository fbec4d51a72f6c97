use crate::server::{
    model::doctor::{DoctorDraft, DoctorParams},
    validation::{exceeds, MAX_NAME_LENGTH},
};

pub fn validate_doctor(draft: DoctorDraft) -> Result<DoctorParams, &'static str> {
    if draft.first_name.is_empty() {
        return Err("El nombre es requerido.");
    }
    if draft.last_name.is_empty() {
        return Err("El apellido es requerido.");
    }
    if draft.specialty.is_empty() {
        return Err("La especialidad es requerida.");
    }
    if exceeds(&draft.first_name, MAX_NAME_LENGTH) {
        return Err("El nombre no puede tener más de 100 caracteres.");
    }
    if exceeds(&draft.last_name, MAX_NAME_LENGTH) {
        return Err("El apellido no puede tener más de 100 caracteres.");
    }
    if exceeds(&draft.specialty, MAX_NAME_LENGTH) {
        return Err("La especialidad no puede tener más de 100 caracteres.");
    }

    Ok(DoctorParams {
        first_name: draft.first_name,
        last_name: draft.last_name,
        specialty: draft.specialty,
    })
}
