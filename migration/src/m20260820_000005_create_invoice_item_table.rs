use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260820_000001_create_equipment_table::Equipment,
    m20260820_000004_create_invoice_table::Invoice,
};

static FK_INVOICE_ITEM_INVOICE: &str = "fk_invoice_item_invoice";
static FK_INVOICE_ITEM_EQUIPMENT: &str = "fk_invoice_item_equipment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceItem::Id))
                    .col(integer(InvoiceItem::InvoiceId))
                    .col(integer(InvoiceItem::EquipmentId))
                    .col(integer(InvoiceItem::Quantity))
                    .col(decimal_len(InvoiceItem::DailyRate, 10, 2))
                    .col(integer(InvoiceItem::RentalDays))
                    .col(decimal_len(InvoiceItem::LineTotal, 10, 2))
                    .col(timestamp(InvoiceItem::CreatedAt))
                    .col(timestamp(InvoiceItem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVOICE_ITEM_INVOICE)
                            .from(InvoiceItem::Table, InvoiceItem::InvoiceId)
                            .to(Invoice::Table, Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVOICE_ITEM_EQUIPMENT)
                            .from(InvoiceItem::Table, InvoiceItem::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoiceItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InvoiceItem {
    Table,
    Id,
    InvoiceId,
    EquipmentId,
    Quantity,
    DailyRate,
    RentalDays,
    LineTotal,
    CreatedAt,
    UpdatedAt,
}
