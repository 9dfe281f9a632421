mod delete;
mod update;

use entity::sea_orm_active_enums::EquipmentCondition;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::equipment::NewEquipment;

/// New equipment input with the given available stock, no buy price and a
/// 25.00 daily rate.
pub(crate) fn new_equipment(name: &str, available_stock: i32) -> NewEquipment {
    NewEquipment {
        name: name.to_string(),
        equipment_type: "Excavator".to_string(),
        location: "Main Warehouse".to_string(),
        daily_rate: dec!(25.00),
        weekly_rate: None,
        monthly_rate: None,
        description: None,
        serial_number: None,
        purchase_date: None,
        buy_price: Decimal::ZERO,
        condition: EquipmentCondition::Good,
        available_stock,
        reserved_stock: 0,
        rented_stock: 0,
        maintenance_stock: 0,
        is_active: true,
    }
}
