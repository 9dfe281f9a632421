use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::InvoiceStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub invoice_number: String,
    pub quotation_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub customer_address: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub subtotal: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub tax_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub paid_amount: Decimal,
    pub status: InvoiceStatus,
    pub due_date: DateTime,
    pub paid_date: Option<DateTime>,
    pub payment_method: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub net_profit: Decimal,
    pub created_by: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Whether the invoice is currently flagged as paid.
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quotation::Entity",
        from = "Column::QuotationId",
        to = "super::quotation::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Quotation,
    #[sea_orm(has_many = "super::invoice_item::Entity")]
    InvoiceItem,
    #[sea_orm(has_many = "super::rental::Entity")]
    Rental,
}

impl Related<super::quotation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotation.def()
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

impl ActiveModelBehavior for ActiveModel {}
