use rentstock_test_utils::prelude::*;

use crate::service::stock::StockService;

/// Expect reserved units to move to rented, leaving available untouched.
#[tokio::test]
async fn moves_reserved_units_to_rented() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Equipment)?;
    let model =
        equipment::insert_equipment_with_stock(&test.db, "Excavator", 6, 4, 0, 0).await?;

    let stock = StockService::new(&test.db);
    let updated = stock.commit_to_rented(model.id, 4).await.unwrap();

    assert_eq!(updated.available_stock, 6);
    assert_eq!(updated.reserved_stock, 0);
    assert_eq!(updated.rented_stock, 4);
    assert_eq!(updated.total_stock, 10);

    Ok(())
}

/// Expect the reserved counter to clamp at zero when committing more than is
/// reserved.
#[tokio::test]
async fn clamps_commit_at_zero_reserved() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Equipment)?;
    let model =
        equipment::insert_equipment_with_stock(&test.db, "Excavator", 6, 2, 0, 0).await?;

    let stock = StockService::new(&test.db);
    let updated = stock.commit_to_rented(model.id, 4).await.unwrap();

    assert_eq!(updated.reserved_stock, 0);
    assert_eq!(updated.rented_stock, 4);

    Ok(())
}
