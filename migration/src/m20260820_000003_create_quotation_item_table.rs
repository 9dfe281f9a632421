use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260820_000001_create_equipment_table::Equipment,
    m20260820_000002_create_quotation_table::Quotation,
};

static FK_QUOTATION_ITEM_QUOTATION: &str = "fk_quotation_item_quotation";
static FK_QUOTATION_ITEM_EQUIPMENT: &str = "fk_quotation_item_equipment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuotationItem::Table)
                    .if_not_exists()
                    .col(pk_auto(QuotationItem::Id))
                    .col(integer(QuotationItem::QuotationId))
                    .col(integer(QuotationItem::EquipmentId))
                    .col(integer(QuotationItem::Quantity).default(1))
                    .col(decimal_len(QuotationItem::DailyRate, 10, 2))
                    .col(integer(QuotationItem::RentalDays))
                    .col(decimal_len(QuotationItem::LineTotal, 10, 2))
                    .col(timestamp(QuotationItem::CreatedAt))
                    .col(timestamp(QuotationItem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUOTATION_ITEM_QUOTATION)
                            .from(QuotationItem::Table, QuotationItem::QuotationId)
                            .to(Quotation::Table, Quotation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUOTATION_ITEM_EQUIPMENT)
                            .from(QuotationItem::Table, QuotationItem::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuotationItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum QuotationItem {
    Table,
    Id,
    QuotationId,
    EquipmentId,
    Quantity,
    DailyRate,
    RentalDays,
    LineTotal,
    CreatedAt,
    UpdatedAt,
}
