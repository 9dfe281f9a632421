use entity::sea_orm_active_enums::QuotationStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Invoice {0} not found")]
    NotFound(i32),
    /// Only accepted quotations may be converted to invoices.
    #[error("Quotation {quotation_id} has status {status:?}, only accepted quotations can be converted")]
    QuotationNotAccepted {
        quotation_id: i32,
        status: QuotationStatus,
    },
    /// Each quotation converts to at most one invoice.
    #[error("Invoice already exists for quotation {quotation_id}")]
    AlreadyInvoiced { quotation_id: i32 },
}
