use entity::sea_orm_active_enums::QuotationStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotationError {
    #[error("Quotation {0} not found")]
    NotFound(i32),
    /// The requested status change is not legal for the quotation's current
    /// status (`draft -> sent -> accepted`; draft and sent may also move to
    /// rejected or expired; accepted, rejected and expired are terminal).
    #[error("Quotation status cannot change from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: QuotationStatus,
        to: QuotationStatus,
    },
    /// The quotation has already been converted; deleting it would orphan
    /// the invoice's back-reference.
    #[error("Quotation {quotation_id} is referenced by invoice {invoice_id} and cannot be deleted")]
    HasInvoice { quotation_id: i32, invoice_id: i32 },
}
