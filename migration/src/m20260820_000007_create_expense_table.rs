use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260820_000001_create_equipment_table::Equipment;

static FK_EXPENSE_EQUIPMENT: &str = "fk_expense_equipment";
static IDX_EXPENSE_EQUIPMENT: &str = "idx_expense_equipment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(pk_auto(Expense::Id))
                    .col(string(Expense::Description))
                    .col(decimal_len(Expense::Amount, 10, 2))
                    .col(string(Expense::Category))
                    .col(timestamp(Expense::Date))
                    .col(string_null(Expense::Vendor))
                    .col(string_null(Expense::ReceiptNumber))
                    .col(integer_null(Expense::EquipmentId))
                    .col(text_null(Expense::Notes))
                    .col(integer(Expense::CreatedBy))
                    .col(timestamp(Expense::CreatedAt))
                    .col(timestamp(Expense::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EXPENSE_EQUIPMENT)
                            .from(Expense::Table, Expense::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXPENSE_EQUIPMENT)
                    .table(Expense::Table)
                    .col(Expense::EquipmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXPENSE_EQUIPMENT)
                    .table(Expense::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Expense {
    Table,
    Id,
    Description,
    Amount,
    Category,
    Date,
    Vendor,
    ReceiptNumber,
    EquipmentId,
    Notes,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
