use entity::{
    invoice, invoice_item,
    prelude::{Invoice, InvoiceItem},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter,
};

pub struct InvoiceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceRepository<'a, C> {
    /// Creates a new instance of [`InvoiceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Number of invoice rows, used to derive the next document number.
    pub async fn count(&self) -> Result<u64, DbErr> {
        Invoice::find().count(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<invoice::Model>, DbErr> {
        Invoice::find_by_id(id).one(self.db).await
    }

    /// Loads an invoice together with its snapshot line items.
    pub async fn get_with_items(
        &self,
        id: i32,
    ) -> Result<Option<(invoice::Model, Vec<invoice_item::Model>)>, DbErr> {
        let Some(invoice) = Invoice::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = invoice.find_related(InvoiceItem).all(self.db).await?;

        Ok(Some((invoice, items)))
    }

    pub async fn items_of(&self, invoice_id: i32) -> Result<Vec<invoice_item::Model>, DbErr> {
        InvoiceItem::find()
            .filter(invoice_item::Column::InvoiceId.eq(invoice_id))
            .all(self.db)
            .await
    }

    pub async fn find_by_quotation_id(
        &self,
        quotation_id: i32,
    ) -> Result<Option<invoice::Model>, DbErr> {
        Invoice::find()
            .filter(invoice::Column::QuotationId.eq(quotation_id))
            .one(self.db)
            .await
    }

    pub async fn insert(&self, model: invoice::ActiveModel) -> Result<invoice::Model, DbErr> {
        model.insert(self.db).await
    }

    pub async fn update(&self, model: invoice::ActiveModel) -> Result<invoice::Model, DbErr> {
        model.update(self.db).await
    }

    pub async fn insert_item(
        &self,
        model: invoice_item::ActiveModel,
    ) -> Result<invoice_item::Model, DbErr> {
        model.insert(self.db).await
    }
}
