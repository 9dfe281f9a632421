mod update;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::model::quotation::{NewQuotation, QuotationItemInput};

/// New quotation input with standard customer values and a five day rental
/// period.
pub(crate) fn new_quotation(items: Vec<QuotationItemInput>) -> NewQuotation {
    let start = Utc::now().naive_utc();

    NewQuotation {
        customer_name: "Acme Construction".to_string(),
        customer_email: "ops@acme.example".to_string(),
        customer_phone: None,
        customer_address: None,
        start_date: start,
        end_date: start + Duration::days(5),
        tax_rate: Decimal::ZERO,
        notes: None,
        valid_until: None,
        items,
    }
}

/// A line item at the equipment's own daily rate.
pub(crate) fn line(equipment_id: i32, quantity: i32, rental_days: i32) -> QuotationItemInput {
    QuotationItemInput {
        equipment_id,
        quantity,
        daily_rate: None,
        rental_days,
    }
}
