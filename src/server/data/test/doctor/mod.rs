use crate::server::{data::doctor::DoctorRepository, model::doctor::DoctorParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_with_full_name;
mod get_all;
mod update;

fn params(first_name: &str, last_name: &str, specialty: &str) -> DoctorParams {
    DoctorParams {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        specialty: specialty.to_string(),
    }
}
