use crate::server::{data::room::RoomRepository, model::room::RoomParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
