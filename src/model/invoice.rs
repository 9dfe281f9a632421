use entity::{invoice, invoice_item};

/// An invoice with its snapshot line items, as returned by the invoice
/// service after conversion.
#[derive(Debug, Clone)]
pub struct InvoiceWithItems {
    pub invoice: invoice::Model,
    pub items: Vec<invoice_item::Model>,
}
