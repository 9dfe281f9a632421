//! Full lifecycle walk: quotation, conversion, payment and reversal, checked
//! against the stock counters at every step.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{InvoiceStatus, QuotationStatus};
use rentstock::{
    error::{quotation::QuotationError, Error},
    model::quotation::{NewQuotation, QuotationItemInput, QuotationPatch},
    service::{invoice::InvoiceService, quotation::QuotationService},
};
use rentstock_test_utils::prelude::*;
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Expect the counters to follow the full lifecycle: reserve on creation,
/// commit on payment, revert on reversal, with one rental appearing and
/// disappearing along the way.
#[tokio::test]
async fn quotation_to_rental_and_back() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;

    let quotations = QuotationService::new(&test.db);
    let invoices = InvoiceService::new(&test.db);

    let start = Utc::now().naive_utc();
    let created = quotations
        .create(
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
                    equipment_id: model.id,
                    quantity: 4,
                    daily_rate: None,
                    rental_days: 5,
                }],
            },
            1,
        )
        .await
        .unwrap();

    let counters = stock_counters(&test, model.id).await?;
    assert_eq!(counters, (6, 4, 0, 10));

    for status in [QuotationStatus::Sent, QuotationStatus::Accepted] {
        quotations
            .update(
                created.quotation.id,
                QuotationPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let converted = invoices
        .convert_quotation(created.quotation.id, 1)
        .await
        .unwrap();
    assert_eq!(converted.invoice.status, InvoiceStatus::Pending);
    assert_eq!(converted.invoice.total, dec!(550.00));

    // Conversion alone must not move stock.
    let counters = stock_counters(&test, model.id).await?;
    assert_eq!(counters, (6, 4, 0, 10));

    let paid = invoices.set_paid(converted.invoice.id, true).await.unwrap();
    assert_eq!(paid.status, InvoiceStatus::Paid);

    let counters = stock_counters(&test, model.id).await?;
    assert_eq!(counters, (6, 0, 4, 10));
    let rentals = entity::prelude::Rental::find().count(&test.db).await?;
    assert_eq!(rentals, 1);

    // The quotation is now locked in by its invoice.
    let result = quotations.delete(created.quotation.id).await;
    assert!(matches!(
        result,
        Err(Error::QuotationError(QuotationError::HasInvoice { .. }))
    ));

    let unpaid = invoices
        .set_paid(converted.invoice.id, false)
        .await
        .unwrap();
    assert_eq!(unpaid.status, InvoiceStatus::Pending);

    let counters = stock_counters(&test, model.id).await?;
    assert_eq!(counters, (6, 4, 0, 10));
    let rentals = entity::prelude::Rental::find().count(&test.db).await?;
    assert_eq!(rentals, 0);

    Ok(())
}

async fn stock_counters(
    test: &TestSetup,
    equipment_id: i32,
) -> Result<(i32, i32, i32, i32), TestError> {
    let current = entity::prelude::Equipment::find_by_id(equipment_id)
        .one(&test.db)
        .await?
        .expect("equipment row exists");

    Ok((
        current.available_stock,
        current.reserved_stock,
        current.rented_stock,
        current.total_stock,
    ))
}
