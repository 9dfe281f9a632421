use chrono::NaiveDateTime;
use entity::{quotation, quotation_item, sea_orm_active_enums::QuotationStatus};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Input for creating a quotation together with its line items.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuotation {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Tax percentage applied to the subtotal, e.g. `8.25` for 8.25%.
    #[serde(default)]
    pub tax_rate: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to 30 days after creation when absent.
    #[serde(default)]
    pub valid_until: Option<NaiveDateTime>,
    pub items: Vec<QuotationItemInput>,
}

/// One requested line item on a new quotation.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationItemInput {
    pub equipment_id: i32,
    pub quantity: i32,
    /// Falls back to the equipment's daily rate when absent.
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    pub rental_days: i32,
}

/// Partial update for a quotation; `None` fields are left unchanged.
///
/// A `status` change is validated against the quotation state machine and may
/// release stock reservations as a side effect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotationPatch {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub tax_rate: Option<Decimal>,
    pub notes: Option<String>,
    pub valid_until: Option<NaiveDateTime>,
    pub status: Option<QuotationStatus>,
}

/// A quotation with its line items, as returned by the quotation service.
#[derive(Debug, Clone)]
pub struct QuotationWithItems {
    pub quotation: quotation::Model,
    pub items: Vec<quotation_item::Model>,
}
