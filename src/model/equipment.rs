use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EquipmentCondition;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Input for registering a piece of equipment.
///
/// `total_stock` is not accepted as input: it is always recomputed as the sum
/// of the four stock counters.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEquipment {
    pub name: String,
    pub equipment_type: String,
    pub location: String,
    pub daily_rate: Decimal,
    #[serde(default)]
    pub weekly_rate: Option<Decimal>,
    #[serde(default)]
    pub monthly_rate: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub buy_price: Decimal,
    #[serde(default = "default_condition")]
    pub condition: EquipmentCondition,
    #[serde(default)]
    pub available_stock: i32,
    #[serde(default)]
    pub reserved_stock: i32,
    #[serde(default)]
    pub rented_stock: i32,
    #[serde(default)]
    pub maintenance_stock: i32,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Partial update for equipment; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquipmentPatch {
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub location: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub weekly_rate: Option<Decimal>,
    pub monthly_rate: Option<Decimal>,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDateTime>,
    pub buy_price: Option<Decimal>,
    pub condition: Option<EquipmentCondition>,
    pub available_stock: Option<i32>,
    pub reserved_stock: Option<i32>,
    pub rented_stock: Option<i32>,
    pub maintenance_stock: Option<i32>,
    pub is_active: Option<bool>,
}

fn default_condition() -> EquipmentCondition {
    EquipmentCondition::Good
}

fn default_is_active() -> bool {
    true
}
