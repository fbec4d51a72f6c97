use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctor::Table)
                    .if_not_exists()
                    .col(pk_auto(Doctor::Id))
                    .col(string_len(Doctor::FirstName, 100))
                    .col(string_len(Doctor::LastName, 100))
                    .col(string_len(Doctor::Specialty, 100))
                    .to_owned(),
            )
            .await?;

        // Lookup index for the duplicate-name check. Not unique: updates may
        // rename a doctor onto an existing name.
        manager
            .create_index(
                Index::create()
                    .name("idx_doctor_full_name")
                    .table(Doctor::Table)
                    .col(Doctor::FirstName)
                    .col(Doctor::LastName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_doctor_full_name")
                    .table(Doctor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Doctor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Doctor {
    Table,
    Id,
    FirstName,
    LastName,
    Specialty,
}
