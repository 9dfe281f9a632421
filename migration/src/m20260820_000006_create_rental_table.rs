use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260820_000001_create_equipment_table::Equipment,
    m20260820_000004_create_invoice_table::Invoice,
};

static FK_RENTAL_INVOICE: &str = "fk_rental_invoice";
static FK_RENTAL_EQUIPMENT: &str = "fk_rental_equipment";
static IDX_RENTAL_INVOICE_EQUIPMENT: &str = "idx_rental_invoice_equipment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rental::Table)
                    .if_not_exists()
                    .col(pk_auto(Rental::Id))
                    .col(integer(Rental::InvoiceId))
                    .col(integer(Rental::EquipmentId))
                    .col(string(Rental::CustomerName))
                    .col(integer(Rental::Quantity))
                    .col(timestamp(Rental::StartDate))
                    .col(timestamp(Rental::EndDate))
                    .col(timestamp_null(Rental::ActualReturnDate))
                    .col(string(Rental::Status).default("active"))
                    .col(decimal_len(Rental::DailyRate, 10, 2))
                    .col(decimal_len(Rental::TotalAmount, 10, 2))
                    .col(decimal_len(Rental::SecurityDeposit, 10, 2).default(0))
                    .col(text_null(Rental::Notes))
                    .col(timestamp(Rental::CreatedAt))
                    .col(timestamp(Rental::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RENTAL_INVOICE)
                            .from(Rental::Table, Rental::InvoiceId)
                            .to(Invoice::Table, Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RENTAL_EQUIPMENT)
                            .from(Rental::Table, Rental::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One rental per invoice/equipment pair.
        manager
            .create_index(
                Index::create()
                    .name(IDX_RENTAL_INVOICE_EQUIPMENT)
                    .table(Rental::Table)
                    .col(Rental::InvoiceId)
                    .col(Rental::EquipmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RENTAL_INVOICE_EQUIPMENT)
                    .table(Rental::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rental::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Rental {
    Table,
    Id,
    InvoiceId,
    EquipmentId,
    CustomerName,
    Quantity,
    StartDate,
    EndDate,
    ActualReturnDate,
    Status,
    DailyRate,
    TotalAmount,
    SecurityDeposit,
    Notes,
    CreatedAt,
    UpdatedAt,
}
