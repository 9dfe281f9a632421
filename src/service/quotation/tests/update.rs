use entity::sea_orm_active_enums::QuotationStatus;
use rentstock_test_utils::prelude::*;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;

use super::{line, new_quotation};
use crate::{
    error::{quotation::QuotationError, Error},
    model::quotation::QuotationPatch,
    service::quotation::QuotationService,
};

/// Expect draft -> sent -> accepted to pass while keeping the reservation in
/// place.
#[tokio::test]
async fn accepting_keeps_reservations() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;

    let service = QuotationService::new(&test.db);
    let created = service
        .create(new_quotation(vec![line(model.id, 4, 5)]), 1)
        .await
        .unwrap();

    let sent = service
        .update(
            created.quotation.id,
            QuotationPatch {
                status: Some(QuotationStatus::Sent),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(sent.quotation.status, QuotationStatus::Sent);

    let accepted = service
        .update(
            created.quotation.id,
            QuotationPatch {
                status: Some(QuotationStatus::Accepted),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(accepted.quotation.status, QuotationStatus::Accepted);

    let current = entity::prelude::Equipment::find_by_id(model.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.available_stock, 6);
    assert_eq!(current.reserved_stock, 4);

    Ok(())
}

/// Expect rejecting a quotation to hand the full reservation back to
/// available stock.
#[tokio::test]
async fn rejecting_releases_reservations() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;

    let service = QuotationService::new(&test.db);
    let created = service
        .create(new_quotation(vec![line(model.id, 4, 5)]), 1)
        .await
        .unwrap();

    service
        .update(
            created.quotation.id,
            QuotationPatch {
                status: Some(QuotationStatus::Rejected),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let current = entity::prelude::Equipment::find_by_id(model.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.available_stock, 10);
    assert_eq!(current.reserved_stock, 0);
    assert_eq!(current.total_stock, 10);

    Ok(())
}

/// Expect an error when moving out of a terminal status.
#[tokio::test]
async fn rejects_transition_out_of_terminal_status() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;

    let service = QuotationService::new(&test.db);
    let created = service
        .create(new_quotation(vec![line(model.id, 1, 1)]), 1)
        .await
        .unwrap();

    service
        .update(
            created.quotation.id,
            QuotationPatch {
                status: Some(QuotationStatus::Rejected),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let result = service
        .update(
            created.quotation.id,
            QuotationPatch {
                status: Some(QuotationStatus::Sent),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::QuotationError(
            QuotationError::InvalidStatusTransition {
                from: QuotationStatus::Rejected,
                to: QuotationStatus::Sent,
            }
        ))
    ));

    Ok(())
}

/// Expect a tax rate change to recompute tax amount and total from the
/// stored subtotal.
#[tokio::test]
async fn recomputes_totals_when_tax_rate_changes() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;
    let model = equipment::insert_equipment(&test.db, "Excavator", 10).await?;

    let service = QuotationService::new(&test.db);
    let created = service
        .create(new_quotation(vec![line(model.id, 4, 5)]), 1)
        .await
        .unwrap();
    assert_eq!(created.quotation.total, dec!(500.00));

    let updated = service
        .update(
            created.quotation.id,
            QuotationPatch {
                tax_rate: Some(dec!(10)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quotation.subtotal, dec!(500.00));
    assert_eq!(updated.quotation.tax_amount, dec!(50.00));
    assert_eq!(updated.quotation.total, dec!(550.00));

    Ok(())
}

/// Expect a not found error for a missing quotation.
#[tokio::test]
async fn errors_for_missing_quotation() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = QuotationService::new(&test.db);
    let result = service.update(1, QuotationPatch::default()).await;

    assert!(matches!(
        result,
        Err(Error::QuotationError(QuotationError::NotFound(1)))
    ));

    Ok(())
}
