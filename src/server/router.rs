use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{appointment, doctor, patient, room},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinica API",
        description = "Doctors, patients, rooms and appointments of a clinic"
    ),
    tags(
        (name = "Medico", description = "Doctors"),
        (name = "Paciente", description = "Patients"),
        (name = "Consultorio", description = "Rooms"),
        (name = "Cita", description = "Appointments")
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// When `enable_api_docs` is set, Swagger UI is served at `/swagger-ui` and the
/// generated document at `/api-docs/openapi.json`.
pub fn router(enable_api_docs: bool) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(doctor::get_doctors, doctor::create_doctor))
        .routes(routes!(doctor::update_doctor, doctor::delete_doctor))
        .routes(routes!(patient::get_patients, patient::create_patient))
        .routes(routes!(patient::update_patient, patient::delete_patient))
        .routes(routes!(room::get_rooms, room::create_room))
        .routes(routes!(room::update_room, room::delete_room))
        .routes(routes!(
            appointment::get_appointments,
            appointment::create_appointment
        ))
        .routes(routes!(
            appointment::update_appointment,
            appointment::delete_appointment
        ))
        .split_for_parts();

    if enable_api_docs {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    } else {
        router
    }
}
