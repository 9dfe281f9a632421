use sea_orm_migration::{prelude::*, schema::*};

static IDX_QUOTATION_STATUS: &str = "idx_quotation_status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quotation::Table)
                    .if_not_exists()
                    .col(pk_auto(Quotation::Id))
                    .col(string_uniq(Quotation::QuotationNumber))
                    .col(string(Quotation::CustomerName))
                    .col(string(Quotation::CustomerEmail))
                    .col(string_null(Quotation::CustomerPhone))
                    .col(text_null(Quotation::CustomerAddress))
                    .col(timestamp(Quotation::StartDate))
                    .col(timestamp(Quotation::EndDate))
                    .col(decimal_len(Quotation::Subtotal, 10, 2).default(0))
                    .col(decimal_len(Quotation::TaxRate, 5, 2).default(0))
                    .col(decimal_len(Quotation::TaxAmount, 10, 2).default(0))
                    .col(decimal_len(Quotation::Total, 10, 2).default(0))
                    .col(string(Quotation::Status).default("draft"))
                    .col(text_null(Quotation::Notes))
                    .col(timestamp_null(Quotation::ValidUntil))
                    .col(integer(Quotation::CreatedBy))
                    .col(timestamp(Quotation::CreatedAt))
                    .col(timestamp(Quotation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QUOTATION_STATUS)
                    .table(Quotation::Table)
                    .col(Quotation::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_QUOTATION_STATUS)
                    .table(Quotation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Quotation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Quotation {
    Table,
    Id,
    QuotationNumber,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    CustomerAddress,
    StartDate,
    EndDate,
    Subtotal,
    TaxRate,
    TaxAmount,
    Total,
    Status,
    Notes,
    ValidUntil,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
