//! Equipment management and derived bookkeeping.
//!
//! Creating or updating equipment recomputes `total_stock` from the four
//! counters and keeps the one purchase expense per equipment row in sync with
//! the current buy price and stock. The sync is an explicit call inside the
//! owning transaction, so repeated restocking edits the same expense row
//! instead of accumulating duplicates.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::{equipment, expense, sea_orm_active_enums::ExpenseCategory};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use crate::{
    data::{equipment::EquipmentRepository, expense::ExpenseRepository},
    error::{equipment::EquipmentError, Error},
    model::equipment::{EquipmentPatch, NewEquipment},
};

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    /// Creates a new instance of [`EquipmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a piece of equipment.
    ///
    /// `total_stock` is computed from the four counters. When the buy price
    /// is positive a purchase expense is recorded in the same transaction.
    ///
    /// # Arguments
    /// - `input` - Equipment fields and initial stock counters
    /// - `created_by` - ID of the user registering the equipment, recorded on
    ///   the purchase expense
    ///
    /// # Returns
    /// - `Ok(equipment::Model)` - The persisted equipment
    /// - `Err(Error::Validation)` - Blank name/type/location or a negative
    ///   rate, price or counter
    pub async fn create(
        &self,
        input: NewEquipment,
        created_by: i32,
    ) -> Result<equipment::Model, Error> {
        validate_text("name", &input.name)?;
        validate_text("equipment_type", &input.equipment_type)?;
        validate_text("location", &input.location)?;
        validate_amount("daily_rate", input.daily_rate)?;
        validate_amount("buy_price", input.buy_price)?;
        if let Some(rate) = input.weekly_rate {
            validate_amount("weekly_rate", rate)?;
        }
        if let Some(rate) = input.monthly_rate {
            validate_amount("monthly_rate", rate)?;
        }
        validate_counter("available_stock", input.available_stock)?;
        validate_counter("reserved_stock", input.reserved_stock)?;
        validate_counter("rented_stock", input.rented_stock)?;
        validate_counter("maintenance_stock", input.maintenance_stock)?;

        let total = input.available_stock
            + input.reserved_stock
            + input.rented_stock
            + input.maintenance_stock;
        let now = Utc::now().naive_utc();

        let txn = self.db.begin().await?;
        let repo = EquipmentRepository::new(&txn);

        let created = repo
            .insert(equipment::ActiveModel {
                name: Set(input.name),
                equipment_type: Set(input.equipment_type),
                location: Set(input.location),
                total_stock: Set(total),
                available_stock: Set(input.available_stock),
                reserved_stock: Set(input.reserved_stock),
                rented_stock: Set(input.rented_stock),
                maintenance_stock: Set(input.maintenance_stock),
                daily_rate: Set(input.daily_rate),
                weekly_rate: Set(input.weekly_rate),
                monthly_rate: Set(input.monthly_rate),
                description: Set(input.description),
                serial_number: Set(input.serial_number),
                purchase_date: Set(input.purchase_date),
                buy_price: Set(input.buy_price),
                condition: Set(input.condition),
                is_active: Set(input.is_active),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .await?;

        if created.buy_price > Decimal::ZERO {
            sync_purchase_expense(&txn, &created, created_by).await?;
        }

        txn.commit().await?;

        info!(equipment_id = created.id, name = %created.name, "created equipment");

        Ok(created)
    }

    /// Loads one equipment row.
    pub async fn get(&self, equipment_id: i32) -> Result<Option<equipment::Model>, Error> {
        Ok(EquipmentRepository::new(self.db)
            .get_by_id(equipment_id)
            .await?)
    }

    /// Applies a partial update.
    ///
    /// `total_stock` is recomputed from the patched counters. When the buy
    /// price or the recomputed total changed and the buy price is positive,
    /// the purchase expense is upserted in the same transaction.
    ///
    /// # Returns
    /// - `Ok(equipment::Model)` - The updated equipment
    /// - `Err(Error::EquipmentError(NotFound))` - No equipment with this ID
    /// - `Err(Error::Validation)` - A patched field fails validation
    pub async fn update(
        &self,
        equipment_id: i32,
        patch: EquipmentPatch,
        created_by: i32,
    ) -> Result<equipment::Model, Error> {
        let txn = self.db.begin().await?;
        let repo = EquipmentRepository::new(&txn);

        let Some(current) = repo.get_by_id(equipment_id).await? else {
            return Err(EquipmentError::NotFound(equipment_id).into());
        };

        if let Some(ref name) = patch.name {
            validate_text("name", name)?;
        }
        if let Some(ref equipment_type) = patch.equipment_type {
            validate_text("equipment_type", equipment_type)?;
        }
        if let Some(ref location) = patch.location {
            validate_text("location", location)?;
        }
        if let Some(rate) = patch.daily_rate {
            validate_amount("daily_rate", rate)?;
        }
        if let Some(rate) = patch.weekly_rate {
            validate_amount("weekly_rate", rate)?;
        }
        if let Some(rate) = patch.monthly_rate {
            validate_amount("monthly_rate", rate)?;
        }
        if let Some(price) = patch.buy_price {
            validate_amount("buy_price", price)?;
        }
        if let Some(value) = patch.available_stock {
            validate_counter("available_stock", value)?;
        }
        if let Some(value) = patch.reserved_stock {
            validate_counter("reserved_stock", value)?;
        }
        if let Some(value) = patch.rented_stock {
            validate_counter("rented_stock", value)?;
        }
        if let Some(value) = patch.maintenance_stock {
            validate_counter("maintenance_stock", value)?;
        }

        let available = patch.available_stock.unwrap_or(current.available_stock);
        let reserved = patch.reserved_stock.unwrap_or(current.reserved_stock);
        let rented = patch.rented_stock.unwrap_or(current.rented_stock);
        let maintenance = patch.maintenance_stock.unwrap_or(current.maintenance_stock);
        let total = available + reserved + rented + maintenance;
        let buy_price = patch.buy_price.unwrap_or(current.buy_price);

        let buy_price_changed = buy_price != current.buy_price;
        let total_changed = total != current.total_stock;

        let mut active: equipment::ActiveModel = current.clone().into();
        if let Some(value) = patch.name {
            active.name = Set(value);
        }
        if let Some(value) = patch.equipment_type {
            active.equipment_type = Set(value);
        }
        if let Some(value) = patch.location {
            active.location = Set(value);
        }
        if let Some(value) = patch.daily_rate {
            active.daily_rate = Set(value);
        }
        if let Some(value) = patch.weekly_rate {
            active.weekly_rate = Set(Some(value));
        }
        if let Some(value) = patch.monthly_rate {
            active.monthly_rate = Set(Some(value));
        }
        if let Some(value) = patch.description {
            active.description = Set(Some(value));
        }
        if let Some(value) = patch.serial_number {
            active.serial_number = Set(Some(value));
        }
        if let Some(value) = patch.purchase_date {
            active.purchase_date = Set(Some(value));
        }
        if let Some(value) = patch.condition {
            active.condition = Set(value);
        }
        if let Some(value) = patch.is_active {
            active.is_active = Set(value);
        }
        active.buy_price = Set(buy_price);
        active.available_stock = Set(available);
        active.reserved_stock = Set(reserved);
        active.rented_stock = Set(rented);
        active.maintenance_stock = Set(maintenance);
        active.total_stock = Set(total);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = repo.update(active).await?;

        if updated.buy_price > Decimal::ZERO && (buy_price_changed || total_changed) {
            sync_purchase_expense(&txn, &updated, created_by).await?;
        }

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes an equipment row.
    ///
    /// Expenses and rentals referencing it cascade; quotation items block the
    /// delete at the database level.
    ///
    /// # Returns
    /// - `Ok(true)` - Equipment deleted
    /// - `Ok(false)` - No equipment with this ID
    pub async fn delete(&self, equipment_id: i32) -> Result<bool, Error> {
        let result = EquipmentRepository::new(self.db)
            .delete(equipment_id)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Upserts the one purchase expense tied to an equipment row.
///
/// The expense amount is the buy price times the total stock; restocking or
/// repricing rewrites the same row rather than inserting another.
async fn sync_purchase_expense<C: ConnectionTrait>(
    db: &C,
    equipment: &equipment::Model,
    created_by: i32,
) -> Result<(), Error> {
    let repo = ExpenseRepository::new(db);

    let cost = equipment.buy_price * Decimal::from(equipment.total_stock);
    let notes = format!(
        "Buy price: ${} x {} units",
        equipment.buy_price, equipment.total_stock
    );
    let now = Utc::now().naive_utc();

    match repo.find_by_equipment_id(equipment.id).await? {
        Some(existing) => {
            let mut active: expense::ActiveModel = existing.into();
            active.amount = Set(cost);
            active.date = Set(now);
            active.notes = Set(Some(notes));
            active.updated_at = Set(now);
            repo.update(active).await?;
        }
        None => {
            repo.insert(expense::ActiveModel {
                description: Set(format!("Equipment Purchase - {}", equipment.name)),
                amount: Set(cost),
                category: Set(ExpenseCategory::EquipmentPurchase),
                date: Set(now),
                vendor: Set(None),
                receipt_number: Set(None),
                equipment_id: Set(Some(equipment.id)),
                notes: Set(Some(notes)),
                created_by: Set(created_by),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .await?;
        }
    }

    Ok(())
}

fn validate_text(field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_amount(field: &'static str, value: Decimal) -> Result<(), Error> {
    if value < Decimal::ZERO {
        return Err(Error::Validation {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }

    Ok(())
}

fn validate_counter(field: &'static str, value: i32) -> Result<(), Error> {
    if value < 0 {
        return Err(Error::Validation {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }

    Ok(())
}
