use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patient::Table)
                    .if_not_exists()
                    .col(pk_auto(Patient::Id))
                    .col(string_len(Patient::FirstName, 100))
                    .col(string_len(Patient::LastName, 100))
                    .col(string_len(Patient::Email, 100))
                    .col(string_len(Patient::Address, 500))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_patient_email")
                    .table(Patient::Table)
                    .col(Patient::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_patient_email")
                    .table(Patient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Patient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Patient {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Address,
}
