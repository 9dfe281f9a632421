pub use sea_orm_migration::prelude::*;

mod m20260820_000001_create_equipment_table;
mod m20260820_000002_create_quotation_table;
mod m20260820_000003_create_quotation_item_table;
mod m20260820_000004_create_invoice_table;
mod m20260820_000005_create_invoice_item_table;
mod m20260820_000006_create_rental_table;
mod m20260820_000007_create_expense_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260820_000001_create_equipment_table::Migration),
            Box::new(m20260820_000002_create_quotation_table::Migration),
            Box::new(m20260820_000003_create_quotation_item_table::Migration),
            Box::new(m20260820_000004_create_invoice_table::Migration),
            Box::new(m20260820_000005_create_invoice_item_table::Migration),
            Box::new(m20260820_000006_create_rental_table::Migration),
            Box::new(m20260820_000007_create_expense_table::Migration),
        ]
    }
}
