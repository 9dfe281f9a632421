//! Equipment fixtures for tests.
//!
//! Factories return in-memory active models with standard test values; insert
//! helpers persist them against the test database. Tests that need unusual
//! field combinations take the factory output and override fields before
//! inserting.

use chrono::Utc;
use entity::{equipment, sea_orm_active_enums::EquipmentCondition};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Create an equipment active model with standard test values.
///
/// Daily rate defaults to 25.00, buy price to 0, and all stock sits in the
/// available counter.
pub fn mock_equipment(name: &str, available_stock: i32) -> equipment::ActiveModel {
    let now = Utc::now().naive_utc();

    equipment::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        equipment_type: ActiveValue::Set("Excavator".to_string()),
        location: ActiveValue::Set("Main Warehouse".to_string()),
        total_stock: ActiveValue::Set(available_stock),
        available_stock: ActiveValue::Set(available_stock),
        reserved_stock: ActiveValue::Set(0),
        rented_stock: ActiveValue::Set(0),
        maintenance_stock: ActiveValue::Set(0),
        daily_rate: ActiveValue::Set(Decimal::new(2500, 2)),
        weekly_rate: ActiveValue::Set(None),
        monthly_rate: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        serial_number: ActiveValue::Set(None),
        purchase_date: ActiveValue::Set(None),
        buy_price: ActiveValue::Set(Decimal::ZERO),
        condition: ActiveValue::Set(EquipmentCondition::Good),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Insert equipment with the given available stock and default rates.
pub async fn insert_equipment<C: ConnectionTrait>(
    db: &C,
    name: &str,
    available_stock: i32,
) -> Result<equipment::Model, DbErr> {
    mock_equipment(name, available_stock).insert(db).await
}

/// Insert equipment with an explicit split across all four stock counters.
pub async fn insert_equipment_with_stock<C: ConnectionTrait>(
    db: &C,
    name: &str,
    available: i32,
    reserved: i32,
    rented: i32,
    maintenance: i32,
) -> Result<equipment::Model, DbErr> {
    let mut model = mock_equipment(name, available);
    model.reserved_stock = ActiveValue::Set(reserved);
    model.rented_stock = ActiveValue::Set(rented);
    model.maintenance_stock = ActiveValue::Set(maintenance);
    model.total_stock = ActiveValue::Set(available + reserved + rented + maintenance);

    model.insert(db).await
}
