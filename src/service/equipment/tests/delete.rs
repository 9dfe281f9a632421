use rentstock_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::new_equipment;
use crate::service::equipment::EquipmentService;

/// Expect Ok(true) on delete and Ok(false) for a second attempt.
#[tokio::test]
async fn deletes_equipment_once() -> Result<(), TestError> {
    let test = test_setup_with_rental_tables!()?;

    let service = EquipmentService::new(&test.db);
    let created = service
        .create(new_equipment("Excavator", 10), 1)
        .await
        .unwrap();

    assert!(service.delete(created.id).await.unwrap());
    assert!(!service.delete(created.id).await.unwrap());

    let count = entity::prelude::Equipment::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}
