//! Create `appointments` table.
//!
//! `customer_id` is intentionally not a foreign key: the customer is checked
//! once at insert time and appointments outlive a deleted customer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointments::Id))
                    .col(integer(Appointments::CustomerId))
                    .col(string(Appointments::Date))
                    .col(string(Appointments::Time))
                    .col(string_null(Appointments::Notes))
                    .col(string(Appointments::Status).default("pending"))
                    .col(timestamp_with_time_zone(Appointments::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    CustomerId,
    Date,
    Time,
    Notes,
    Status,
    CreatedAt,
}
