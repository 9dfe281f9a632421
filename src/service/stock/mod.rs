//! Stock ledger.
//!
//! Every unit of every equipment row sits in exactly one of four counters:
//! available, reserved, rented or maintenance. The operations here move
//! quantities between counters; `total_stock` is recomputed from the four on
//! every write. The service is generic over [`sea_orm::ConnectionTrait`] and
//! runs inside the caller's transaction, so a failed quotation or payment
//! rolls its counter movements back together with everything else.

#[cfg(test)]
mod tests;

use sea_orm::ConnectionTrait;
use tracing::warn;

use crate::{
    data::equipment::{EquipmentRepository, StockLevels},
    error::{equipment::EquipmentError, stock::StockError, Error},
};

pub struct StockService<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StockService<'a, C> {
    /// Creates a new instance of [`StockService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Moves units from available to reserved.
    ///
    /// # Returns
    /// - `Ok(equipment::Model)` - Equipment with the updated counters
    /// - `Err(Error::StockError(StockError::InsufficientStock))` - Fewer than
    ///   `quantity` units available; nothing was written
    /// - `Err(Error::StockError(StockError::ConcurrentUpdate))` - Another
    ///   transaction moved the counters first; retry the whole operation
    pub async fn reserve(
        &self,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<entity::equipment::Model, Error> {
        let equipment = self.load(equipment_id).await?;

        if quantity > equipment.available_stock {
            return Err(StockError::InsufficientStock {
                equipment_id,
                equipment_name: equipment.name.clone(),
                requested: quantity,
                available: equipment.available_stock,
            }
            .into());
        }

        let mut levels = StockLevels::of(&equipment);
        levels.available -= quantity;
        levels.reserved += quantity;

        self.apply(equipment, levels).await
    }

    /// Returns reserved units to available.
    ///
    /// The reserved counter is clamped at zero so a repeated release of the
    /// same reservation cannot drive it negative; a clamp indicates the
    /// release was already applied and is logged as a warning.
    pub async fn release(
        &self,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<entity::equipment::Model, Error> {
        let equipment = self.load(equipment_id).await?;

        let mut levels = StockLevels::of(&equipment);
        if quantity > levels.reserved {
            warn!(
                equipment_id,
                requested = quantity,
                reserved = levels.reserved,
                "release clamped at zero reserved stock"
            );
        }
        levels.reserved = (levels.reserved - quantity).max(0);
        levels.available += quantity;

        self.apply(equipment, levels).await
    }

    /// Moves reserved units to rented when an invoice is paid.
    pub async fn commit_to_rented(
        &self,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<entity::equipment::Model, Error> {
        let equipment = self.load(equipment_id).await?;

        let mut levels = StockLevels::of(&equipment);
        if quantity > levels.reserved {
            warn!(
                equipment_id,
                requested = quantity,
                reserved = levels.reserved,
                "rental commit clamped at zero reserved stock"
            );
        }
        levels.reserved = (levels.reserved - quantity).max(0);
        levels.rented += quantity;

        self.apply(equipment, levels).await
    }

    /// Moves rented units back to reserved when a payment is reverted.
    pub async fn revert_from_rented(
        &self,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<entity::equipment::Model, Error> {
        let equipment = self.load(equipment_id).await?;

        let mut levels = StockLevels::of(&equipment);
        if quantity > levels.rented {
            warn!(
                equipment_id,
                requested = quantity,
                rented = levels.rented,
                "rental revert clamped at zero rented stock"
            );
        }
        levels.rented = (levels.rented - quantity).max(0);
        levels.reserved += quantity;

        self.apply(equipment, levels).await
    }

    async fn load(&self, equipment_id: i32) -> Result<entity::equipment::Model, Error> {
        EquipmentRepository::new(self.db)
            .get_by_id(equipment_id)
            .await?
            .ok_or_else(|| EquipmentError::NotFound(equipment_id).into())
    }

    async fn apply(
        &self,
        equipment: entity::equipment::Model,
        levels: StockLevels,
    ) -> Result<entity::equipment::Model, Error> {
        let rows = EquipmentRepository::new(self.db)
            .apply_stock_levels(&equipment, &levels)
            .await?;

        if rows == 0 {
            return Err(StockError::ConcurrentUpdate(equipment.id).into());
        }

        Ok(entity::equipment::Model {
            total_stock: levels.total(),
            available_stock: levels.available,
            reserved_stock: levels.reserved,
            rented_stock: levels.rented,
            maintenance_stock: levels.maintenance,
            ..equipment
        })
    }
}
