use entity::sea_orm_active_enums::{InvoiceStatus, RentalStatus};
use rentstock_test_utils::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};

use super::accepted_quotation;
use crate::{
    error::{invoice::InvoiceError, Error},
    service::invoice::InvoiceService,
};

/// Expect paying an invoice to create one active rental per line and move
/// the reserved units to rented.
#[tokio::test]
async fn creates_rentals_and_commits_stock() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;
    let quotation = accepted_quotation(&test.db, model.id, 4).await.unwrap();

    let service = InvoiceService::new(&test.db);
    let converted = service
        .convert_quotation(quotation.quotation.id, 1)
        .await
        .unwrap();

    let paid = service.set_paid(converted.invoice.id, true).await.unwrap();

    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert!(paid.paid_date.is_some());
    assert_eq!(paid.paid_amount, paid.total);

    let current = entity::prelude::Equipment::find_by_id(model.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.available_stock, 6);
    assert_eq!(current.reserved_stock, 0);
    assert_eq!(current.rented_stock, 4);
    assert_eq!(current.total_stock, 10);

    let rentals = entity::prelude::Rental::find().all(&test.db).await?;
    assert_eq!(rentals.len(), 1);
    assert_eq!(rentals[0].invoice_id, converted.invoice.id);
    assert_eq!(rentals[0].equipment_id, model.id);
    assert_eq!(rentals[0].quantity, 4);
    assert_eq!(rentals[0].status, RentalStatus::Active);
    assert_eq!(rentals[0].customer_name, "Acme Construction");

    Ok(())
}

/// Expect paying the same invoice twice to change nothing: same counters,
/// still a single rental.
#[tokio::test]
async fn paying_twice_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;
    let quotation = accepted_quotation(&test.db, model.id, 4).await.unwrap();

    let service = InvoiceService::new(&test.db);
    let converted = service
        .convert_quotation(quotation.quotation.id, 1)
        .await
        .unwrap();

    service.set_paid(converted.invoice.id, true).await.unwrap();
    service.set_paid(converted.invoice.id, true).await.unwrap();

    let current = entity::prelude::Equipment::find_by_id(model.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.reserved_stock, 0);
    assert_eq!(current.rented_stock, 4);
    assert_eq!(current.total_stock, 10);

    let rentals = entity::prelude::Rental::find().count(&test.db).await?;
    assert_eq!(rentals, 1);

    Ok(())
}

/// Expect marking a paid invoice unpaid to delete its rentals and restore
/// the pre-payment counters exactly.
#[tokio::test]
async fn unpaying_restores_counters_and_deletes_rentals() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;
    let quotation = accepted_quotation(&test.db, model.id, 4).await.unwrap();

    let service = InvoiceService::new(&test.db);
    let converted = service
        .convert_quotation(quotation.quotation.id, 1)
        .await
        .unwrap();

    service.set_paid(converted.invoice.id, true).await.unwrap();
    let unpaid = service.set_paid(converted.invoice.id, false).await.unwrap();

    assert_eq!(unpaid.status, InvoiceStatus::Pending);
    assert_eq!(unpaid.paid_amount, dec!(0));
    assert!(unpaid.paid_date.is_none());

    let current = entity::prelude::Equipment::find_by_id(model.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.available_stock, 6);
    assert_eq!(current.reserved_stock, 4);
    assert_eq!(current.rented_stock, 0);
    assert_eq!(current.total_stock, 10);

    let rentals = entity::prelude::Rental::find().count(&test.db).await?;
    assert_eq!(rentals, 0);

    Ok(())
}

/// Expect net profit to subtract the purchase cost of the billed units from
/// the invoice total.
#[tokio::test]
async fn computes_net_profit_from_buy_price() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let mut model = equipment::mock_equipment("Excavator", 10);
    model.buy_price = ActiveValue::Set(dec!(100.00));
    let model = model.insert(&test.db).await?;

    let quotation = accepted_quotation(&test.db, model.id, 4).await.unwrap();

    let service = InvoiceService::new(&test.db);
    let converted = service
        .convert_quotation(quotation.quotation.id, 1)
        .await
        .unwrap();

    assert_eq!(converted.invoice.net_profit, dec!(0));

    let paid = service.set_paid(converted.invoice.id, true).await.unwrap();

    // 4 x 25.00 x 5 days = 500.00 subtotal, 550.00 with 10% tax;
    // purchase cost 4 x 100.00 = 400.00.
    assert_eq!(paid.total, dec!(550.00));
    assert_eq!(paid.net_profit, dec!(150.00));

    Ok(())
}

/// Expect an invoice without a linked quotation to toggle its paid fields
/// without touching stock or creating rentals.
#[tokio::test]
async fn standalone_invoice_has_no_stock_side_effects() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;
    let standalone =
        invoice::insert_standalone_invoice(&test.db, "INV-000900", Decimal::new(30000, 2)).await?;

    let service = InvoiceService::new(&test.db);
    let paid = service.set_paid(standalone.id, true).await.unwrap();

    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert_eq!(paid.paid_amount, dec!(300.00));

    let current = entity::prelude::Equipment::find_by_id(model.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.available_stock, 10);
    assert_eq!(current.rented_stock, 0);

    let rentals = entity::prelude::Rental::find().count(&test.db).await?;
    assert_eq!(rentals, 0);

    Ok(())
}

/// Expect a not found error for a missing invoice.
#[tokio::test]
async fn errors_for_missing_invoice() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = InvoiceService::new(&test.db);
    let result = service.set_paid(1, true).await;

    assert!(matches!(
        result,
        Err(Error::InvoiceError(InvoiceError::NotFound(1)))
    ));

    Ok(())
}
