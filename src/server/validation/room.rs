use crate::server::model::room::{RoomDraft, RoomParams};

pub fn validate_room(draft: RoomDraft) -> Result<RoomParams, &'static str> {
    let Some(number) = draft.number else {
        return Err("El número es requerido.");
    };
    let Some(floor) = draft.floor else {
        return Err("El piso es requerido.");
    };

    Ok(RoomParams { number, floor })
}
