use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260820_000002_create_quotation_table::Quotation;

static FK_INVOICE_QUOTATION: &str = "fk_invoice_quotation";
static IDX_INVOICE_STATUS: &str = "idx_invoice_status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(string_uniq(Invoice::InvoiceNumber))
                    .col(integer_null(Invoice::QuotationId))
                    .col(string(Invoice::CustomerName))
                    .col(string(Invoice::CustomerEmail))
                    .col(string_null(Invoice::CustomerPhone))
                    .col(text_null(Invoice::CustomerAddress))
                    .col(decimal_len(Invoice::Subtotal, 10, 2))
                    .col(decimal_len(Invoice::TaxAmount, 10, 2))
                    .col(decimal_len(Invoice::Total, 10, 2))
                    .col(decimal_len(Invoice::PaidAmount, 10, 2).default(0))
                    .col(string(Invoice::Status).default("pending"))
                    .col(timestamp(Invoice::DueDate))
                    .col(timestamp_null(Invoice::PaidDate))
                    .col(string_null(Invoice::PaymentMethod))
                    .col(text_null(Invoice::Notes))
                    .col(decimal_len(Invoice::NetProfit, 10, 2).default(0))
                    .col(integer(Invoice::CreatedBy))
                    .col(timestamp(Invoice::CreatedAt))
                    .col(timestamp(Invoice::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVOICE_QUOTATION)
                            .from(Invoice::Table, Invoice::QuotationId)
                            .to(Quotation::Table, Quotation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVOICE_STATUS)
                    .table(Invoice::Table)
                    .col(Invoice::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVOICE_STATUS)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    InvoiceNumber,
    QuotationId,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    CustomerAddress,
    Subtotal,
    TaxAmount,
    Total,
    PaidAmount,
    Status,
    DueDate,
    PaidDate,
    PaymentMethod,
    Notes,
    NetProfit,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
