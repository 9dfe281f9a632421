use sea_orm_migration::{prelude::*, schema::*};

static IDX_EQUIPMENT_NAME: &str = "idx_equipment_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string(Equipment::Name))
                    .col(string(Equipment::EquipmentType))
                    .col(string(Equipment::Location))
                    .col(integer(Equipment::TotalStock).default(0))
                    .col(integer(Equipment::AvailableStock).default(0))
                    .col(integer(Equipment::ReservedStock).default(0))
                    .col(integer(Equipment::RentedStock).default(0))
                    .col(integer(Equipment::MaintenanceStock).default(0))
                    .col(decimal_len(Equipment::DailyRate, 10, 2))
                    .col(decimal_len_null(Equipment::WeeklyRate, 10, 2))
                    .col(decimal_len_null(Equipment::MonthlyRate, 10, 2))
                    .col(text_null(Equipment::Description))
                    .col(string_null(Equipment::SerialNumber))
                    .col(timestamp_null(Equipment::PurchaseDate))
                    .col(decimal_len(Equipment::BuyPrice, 10, 2).default(0))
                    .col(string(Equipment::Condition).default("good"))
                    .col(boolean(Equipment::IsActive).default(true))
                    .col(timestamp(Equipment::CreatedAt))
                    .col(timestamp(Equipment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_NAME)
                    .table(Equipment::Table)
                    .col(Equipment::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_NAME)
                    .table(Equipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    Name,
    EquipmentType,
    Location,
    TotalStock,
    AvailableStock,
    ReservedStock,
    RentedStock,
    MaintenanceStock,
    DailyRate,
    WeeklyRate,
    MonthlyRate,
    Description,
    SerialNumber,
    PurchaseDate,
    BuyPrice,
    Condition,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
