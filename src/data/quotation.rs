use entity::{
    prelude::{Quotation, QuotationItem},
    quotation, quotation_item,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter,
};

pub struct QuotationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuotationRepository<'a, C> {
    /// Creates a new instance of [`QuotationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Number of quotation rows, used to derive the next document number.
    pub async fn count(&self) -> Result<u64, DbErr> {
        Quotation::find().count(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<quotation::Model>, DbErr> {
        Quotation::find_by_id(id).one(self.db).await
    }

    /// Loads a quotation together with its line items.
    pub async fn get_with_items(
        &self,
        id: i32,
    ) -> Result<Option<(quotation::Model, Vec<quotation_item::Model>)>, DbErr> {
        let Some(quotation) = Quotation::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = quotation.find_related(QuotationItem).all(self.db).await?;

        Ok(Some((quotation, items)))
    }

    pub async fn items_of(
        &self,
        quotation_id: i32,
    ) -> Result<Vec<quotation_item::Model>, DbErr> {
        QuotationItem::find()
            .filter(quotation_item::Column::QuotationId.eq(quotation_id))
            .all(self.db)
            .await
    }

    pub async fn insert(&self, model: quotation::ActiveModel) -> Result<quotation::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn update(&self, model: quotation::ActiveModel) -> Result<quotation::Model, DbErr> {
        model.update(self.db).await
    }

    pub async fn insert_item(
        &self,
        model: quotation_item::ActiveModel,
    ) -> Result<quotation_item::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn delete_items(&self, quotation_id: i32) -> Result<DeleteResult, DbErr> {
        QuotationItem::delete_many()
            .filter(quotation_item::Column::QuotationId.eq(quotation_id))
            .exec(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Quotation::delete_by_id(id).exec(self.db).await
    }
}
