use crate::server::{data::patient::PatientRepository, model::patient::PatientParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod email_exists;
mod update;

fn params(email: &str) -> PatientParams {
    PatientParams {
        first_name: "Ana".to_string(),
        last_name: "Rivera".to_string(),
        email: email.to_string(),
        address: "Av. Central 123".to_string(),
    }
}
