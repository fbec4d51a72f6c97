pub use sea_orm_migration::prelude::*;

mod m20250123_000001_create_doctor_table;
mod m20250123_000002_create_patient_table;
mod m20250123_000003_create_room_table;
mod m20250123_000004_create_appointment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250123_000001_create_doctor_table::Migration),
            Box::new(m20250123_000002_create_patient_table::Migration),
            Box::new(m20250123_000003_create_room_table::Migration),
            Box::new(m20250123_000004_create_appointment_table::Migration),
        ]
    }
}
