use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crate::server::{
    data::appointment::AppointmentRepository, model::appointment::AppointmentParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod slot_taken;
mod update;

fn date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}
