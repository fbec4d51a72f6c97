use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250123_000001_create_doctor_table::Doctor, m20250123_000002_create_patient_table::Patient,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::PatientId))
                    .col(integer(Appointment::DoctorId))
                    .col(date_time(Appointment::Date))
                    .col(time(Appointment::Time))
                    .col(integer(Appointment::RoomNumber))
                    // No cascade: deleting a referenced doctor or patient is
                    // rejected by the store.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_doctor_id")
                            .from(Appointment::Table, Appointment::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient_id")
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_doctor_id")
                    .table(Appointment::Table)
                    .col(Appointment::DoctorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_patient_id")
                    .table(Appointment::Table)
                    .col(Appointment::PatientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_slot")
                    .table(Appointment::Table)
                    .col(Appointment::Date)
                    .col(Appointment::Time)
                    .col(Appointment::RoomNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    PatientId,
    DoctorId,
    Date,
    Time,
    RoomNumber,
}
