pub mod prelude;

pub mod equipment;
pub mod expense;
pub mod invoice;
pub mod invoice_item;
pub mod quotation;
pub mod quotation_item;
pub mod rental;
pub mod sea_orm_active_enums;
