use sea_orm_migration::prelude::*;

const IDX_APPOINTMENTS_CUSTOMER: &str = "idx_appointments_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Appointments: lookups by customer
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_APPOINTMENTS_CUSTOMER)
                    .table(Appointments::Table)
                    .col(Appointments::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENTS_CUSTOMER)
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments { Table, CustomerId }
