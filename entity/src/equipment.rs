use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EquipmentCondition;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub equipment_type: String,
    pub location: String,
    pub total_stock: i32,
    pub available_stock: i32,
    pub reserved_stock: i32,
    pub rented_stock: i32,
    pub maintenance_stock: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub daily_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub weekly_rate: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub monthly_rate: Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub buy_price: Decimal,
    pub condition: EquipmentCondition,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quotation_item::Entity")]
    QuotationItem,
    #[sea_orm(has_many = "super::invoice_item::Entity")]
    InvoiceItem,
    #[sea_orm(has_many = "super::rental::Entity")]
    Rental,
    #[sea_orm(has_many = "super::expense::Entity")]
    Expense,
}

impl Related<super::quotation_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuotationItem.def()
    }
}

impl Related<super::invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceItem.def()
    }
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rental.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
