use crate::server::{
    model::patient::{PatientDraft, PatientParams},
    validation::{exceeds, MAX_ADDRESS_LENGTH, MAX_NAME_LENGTH},
};

pub fn validate_patient(draft: PatientDraft) -> Result<PatientParams, &'static str> {
    if draft.first_name.is_empty() {
        return Err("El nombre es requerido.");
    }
    if draft.last_name.is_empty() {
        return Err("El apellido es requerido.");
    }
    if draft.email.is_empty() {
        return Err("El correo es requerido.");
    }
    let Some(address) = draft.address else {
        return Err("La dirección es requerida.");
    };
    if exceeds(&draft.first_name, MAX_NAME_LENGTH) {
        return Err("El nombre no puede tener más de 100 caracteres.");
    }
    if exceeds(&draft.last_name, MAX_NAME_LENGTH) {
        return Err("El apellido no puede tener más de 100 caracteres.");
    }
    if exceeds(&draft.email, MAX_NAME_LENGTH) {
        return Err("El correo no puede tener más de 100 caracteres.");
    }
    if exceeds(&address, MAX_ADDRESS_LENGTH) {
        return Err("La dirección no puede tener más de 500 caracteres.");
    }

    Ok(PatientParams {
        first_name: draft.first_name,
        last_name: draft.last_name,
        email: draft.email,
        address,
    })
}
