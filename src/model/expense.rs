use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ExpenseCategory;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Input for recording a manual expense.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    /// Defaults to now when absent.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub equipment_id: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for an expense; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<ExpenseCategory>,
    pub date: Option<NaiveDateTime>,
    pub vendor: Option<String>,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
}
