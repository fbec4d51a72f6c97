use crate::server::model::appointment::{AppointmentDraft, AppointmentParams};

pub fn validate_appointment(draft: AppointmentDraft) -> Result<AppointmentParams, &'static str> {
    let Some(date) = draft.date else {
        return Err("La fecha es requerida.");
    };
    let Some(time) = draft.time else {
        return Err("La hora es requerida.");
    };

    Ok(AppointmentParams {
        patient_id: draft.patient_id,
        doctor_id: draft.doctor_id,
        date,
        time,
        room_number: draft.room_number,
    })
}
