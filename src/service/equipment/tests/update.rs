use rentstock_test_utils::prelude::*;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;

use super::new_equipment;
use crate::{
    error::{equipment::EquipmentError, Error},
    model::equipment::EquipmentPatch,
    service::equipment::EquipmentService,
};

/// Expect restocking to rewrite the existing purchase expense instead of
/// inserting a second row.
#[tokio::test]
async fn updates_purchase_expense_in_place() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = EquipmentService::new(&test.db);
    let mut input = new_equipment("Excavator", 10);
    input.buy_price = dec!(50.00);
    let created = service.create(input, 1).await.unwrap();

    let before = entity::prelude::Expense::find().all(&test.db).await?;
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].amount, dec!(500.00));

    service
        .update(
            created.id,
            EquipmentPatch {
                available_stock: Some(12),
                ..Default::default()
            },
            1,
        )
        .await
        .unwrap();

    let after = entity::prelude::Expense::find().all(&test.db).await?;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, before[0].id);
    assert_eq!(after[0].amount, dec!(600.00));

    Ok(())
}

/// Expect the recomputed total to follow patched counters.
#[tokio::test]
async fn recomputes_total_from_patched_counters() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = EquipmentService::new(&test.db);
    let created = service
        .create(new_equipment("Excavator", 10), 1)
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            EquipmentPatch {
                available_stock: Some(8),
                maintenance_stock: Some(3),
                ..Default::default()
            },
            1,
        )
        .await
        .unwrap();

    assert_eq!(updated.available_stock, 8);
    assert_eq!(updated.maintenance_stock, 3);
    assert_eq!(updated.total_stock, 11);

    Ok(())
}

/// Expect an untouched expense table when neither buy price nor total stock
/// changed.
#[tokio::test]
async fn skips_expense_sync_when_nothing_relevant_changed() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = EquipmentService::new(&test.db);
    let mut input = new_equipment("Excavator", 10);
    input.buy_price = dec!(50.00);
    let created = service.create(input, 1).await.unwrap();

    let before = entity::prelude::Expense::find().all(&test.db).await?;

    service
        .update(
            created.id,
            EquipmentPatch {
                location: Some("North Yard".to_string()),
                ..Default::default()
            },
            1,
        )
        .await
        .unwrap();

    let after = entity::prelude::Expense::find().all(&test.db).await?;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].updated_at, before[0].updated_at);

    Ok(())
}

/// Expect a negative optional rate in the patch to be rejected before any
/// field is written.
#[tokio::test]
async fn rejects_negative_optional_rates() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = EquipmentService::new(&test.db);
    let created = service
        .create(new_equipment("Excavator", 10), 1)
        .await
        .unwrap();

    let result = service
        .update(
            created.id,
            EquipmentPatch {
                name: Some("Mini Excavator".to_string()),
                weekly_rate: Some(dec!(-150.00)),
                ..Default::default()
            },
            1,
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation { field, .. }) if field == "weekly_rate"
    ));

    // The rejected patch must not have applied any of its fields.
    let current = entity::prelude::Equipment::find_by_id(created.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(current.name, "Excavator");

    Ok(())
}

/// Expect a not found error for a missing equipment row.
#[tokio::test]
async fn errors_for_missing_equipment() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = EquipmentService::new(&test.db);
    let result = service.update(1, EquipmentPatch::default(), 1).await;

    assert!(matches!(
        result,
        Err(Error::EquipmentError(EquipmentError::NotFound(1)))
    ));

    Ok(())
}
