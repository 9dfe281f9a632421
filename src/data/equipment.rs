use chrono::Utc;
use entity::{equipment, prelude::Equipment};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

/// Target values for the four stock counters of one equipment row.
///
/// The total is always derived; callers cannot set it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevels {
    pub available: i32,
    pub reserved: i32,
    pub rented: i32,
    pub maintenance: i32,
}

impl StockLevels {
    /// Counters currently stored on an equipment row.
    pub fn of(equipment: &equipment::Model) -> Self {
        Self {
            available: equipment.available_stock,
            reserved: equipment.reserved_stock,
            rented: equipment.rented_stock,
            maintenance: equipment.maintenance_stock,
        }
    }

    /// Recomputed total stock.
    pub fn total(&self) -> i32 {
        self.available + self.reserved + self.rented + self.maintenance
    }
}

pub struct EquipmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    /// Creates a new instance of [`EquipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<equipment::Model>, DbErr> {
        Equipment::find_by_id(id).one(self.db).await
    }

    pub async fn insert(&self, model: equipment::ActiveModel) -> Result<equipment::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn update(&self, model: equipment::ActiveModel) -> Result<equipment::Model, DbErr> {
        model.update(self.db).await
    }

    /// Deletes an equipment row.
    ///
    /// Returns OK regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Equipment::delete_by_id(id).exec(self.db).await
    }

    /// Writes a new set of stock counters, guarded by the counters observed
    /// when the row was read.
    ///
    /// The update filters on the previously observed values, so a concurrent
    /// transaction that already moved the counters makes this match zero
    /// rows. Returns the number of rows affected; `0` means the caller lost
    /// the race and must fail its unit of work.
    pub async fn apply_stock_levels(
        &self,
        current: &equipment::Model,
        levels: &StockLevels,
    ) -> Result<u64, DbErr> {
        let result = Equipment::update_many()
            .col_expr(equipment::Column::AvailableStock, Expr::value(levels.available))
            .col_expr(equipment::Column::ReservedStock, Expr::value(levels.reserved))
            .col_expr(equipment::Column::RentedStock, Expr::value(levels.rented))
            .col_expr(
                equipment::Column::MaintenanceStock,
                Expr::value(levels.maintenance),
            )
            .col_expr(equipment::Column::TotalStock, Expr::value(levels.total()))
            .col_expr(
                equipment::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(equipment::Column::Id.eq(current.id))
            .filter(equipment::Column::AvailableStock.eq(current.available_stock))
            .filter(equipment::Column::ReservedStock.eq(current.reserved_stock))
            .filter(equipment::Column::RentedStock.eq(current.rented_stock))
            .filter(equipment::Column::MaintenanceStock.eq(current.maintenance_stock))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
