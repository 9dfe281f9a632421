pub use super::equipment::Entity as Equipment;
pub use super::expense::Entity as Expense;
pub use super::invoice::Entity as Invoice;
pub use super::invoice_item::Entity as InvoiceItem;
pub use super::quotation::Entity as Quotation;
pub use super::quotation_item::Entity as QuotationItem;
pub use super::rental::Entity as Rental;
