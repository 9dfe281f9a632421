use entity::{expense, prelude::Expense};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
};

pub struct ExpenseRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpenseRepository<'a, C> {
    /// Creates a new instance of [`ExpenseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<expense::Model>, DbErr> {
        Expense::find_by_id(id).one(self.db).await
    }

    /// Purchase expenses are kept one-per-equipment, so the linked row is
    /// looked up by equipment id rather than by its own id.
    pub async fn find_by_equipment_id(
        &self,
        equipment_id: i32,
    ) -> Result<Option<expense::Model>, DbErr> {
        Expense::find()
            .filter(expense::Column::EquipmentId.eq(equipment_id))
            .one(self.db)
            .await
    }

    pub async fn insert(&self, model: expense::ActiveModel) -> Result<expense::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn update(&self, model: expense::ActiveModel) -> Result<expense::Model, DbErr> {
        model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Expense::delete_by_id(id).exec(self.db).await
    }
}
