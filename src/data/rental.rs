use entity::{prelude::Rental, rental};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
};

pub struct RentalRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RentalRepository<'a, C> {
    /// Creates a new instance of [`RentalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_invoice(&self, invoice_id: i32) -> Result<Vec<rental::Model>, DbErr> {
        Rental::find()
            .filter(rental::Column::InvoiceId.eq(invoice_id))
            .all(self.db)
            .await
    }

    /// At most one rental exists per invoice/equipment pair.
    pub async fn find_by_invoice_and_equipment(
        &self,
        invoice_id: i32,
        equipment_id: i32,
    ) -> Result<Option<rental::Model>, DbErr> {
        Rental::find()
            .filter(rental::Column::InvoiceId.eq(invoice_id))
            .filter(rental::Column::EquipmentId.eq(equipment_id))
            .one(self.db)
            .await
    }

    pub async fn insert(&self, model: rental::ActiveModel) -> Result<rental::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn delete_by_invoice(&self, invoice_id: i32) -> Result<DeleteResult, DbErr> {
        Rental::delete_many()
            .filter(rental::Column::InvoiceId.eq(invoice_id))
            .exec(self.db)
            .await
    }
}
