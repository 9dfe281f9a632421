mod set_paid;

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::QuotationStatus;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;

use crate::{
    error::Error,
    model::quotation::{NewQuotation, QuotationItemInput, QuotationPatch, QuotationWithItems},
    service::quotation::QuotationService,
};

/// New quotation input for one line item, with a 10% tax rate over a five
/// day rental.
pub(crate) fn quotation_input(equipment_id: i32, quantity: i32) -> NewQuotation {
    let start = Utc::now().naive_utc();

    NewQuotation {
        customer_name: "Acme Construction".to_string(),
        customer_email: "ops@acme.example".to_string(),
        customer_phone: None,
        customer_address: None,
        start_date: start,
        end_date: start + Duration::days(5),
        tax_rate: dec!(10),
        notes: None,
        valid_until: None,
        items: vec![QuotationItemInput {
            equipment_id,
            quantity,
            daily_rate: None,
            rental_days: 5,
        }],
    }
}

/// Creates a quotation for one line item and walks it to accepted, ready for
/// conversion.
pub(crate) async fn accepted_quotation(
    db: &DatabaseConnection,
    equipment_id: i32,
    quantity: i32,
) -> Result<QuotationWithItems, Error> {
    let service = QuotationService::new(db);

    let created = service
        .create(quotation_input(equipment_id, quantity), 1)
        .await?;

    for status in [QuotationStatus::Sent, QuotationStatus::Accepted] {
        service
            .update(
                created.quotation.id,
                QuotationPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await?;
    }

    service
        .get(created.quotation.id)
        .await
        .map(|found| found.expect("quotation just created"))
}
