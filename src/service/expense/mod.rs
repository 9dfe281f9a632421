//! Manual expense records.
//!
//! Independent of the derived purchase expenses: these rows are entered by
//! hand for maintenance, transportation, insurance and similar costs.

use chrono::Utc;
use entity::expense;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, Set};

use crate::{
    data::expense::ExpenseRepository,
    error::{expense::ExpenseError, Error},
    model::expense::{ExpensePatch, NewExpense},
};

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseService<'a> {
    /// Creates a new instance of [`ExpenseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a manual expense. The date defaults to now when absent.
    ///
    /// # Returns
    /// - `Ok(expense::Model)` - The persisted expense
    /// - `Err(Error::Validation)` - Blank description or non-positive amount
    pub async fn create(
        &self,
        input: NewExpense,
        created_by: i32,
    ) -> Result<expense::Model, Error> {
        if input.description.trim().is_empty() {
            return Err(Error::Validation {
                field: "description",
                reason: "must not be empty".to_string(),
            });
        }
        if input.amount <= Decimal::ZERO {
            return Err(Error::Validation {
                field: "amount",
                reason: format!("must be positive, got {}", input.amount),
            });
        }

        let now = Utc::now().naive_utc();

        let created = ExpenseRepository::new(self.db)
            .insert(expense::ActiveModel {
                description: Set(input.description),
                amount: Set(input.amount),
                category: Set(input.category),
                date: Set(input.date.unwrap_or(now)),
                vendor: Set(input.vendor),
                receipt_number: Set(input.receipt_number),
                equipment_id: Set(input.equipment_id),
                notes: Set(input.notes),
                created_by: Set(created_by),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .await?;

        Ok(created)
    }

    /// Loads one expense.
    pub async fn get(&self, expense_id: i32) -> Result<Option<expense::Model>, Error> {
        Ok(ExpenseRepository::new(self.db).get_by_id(expense_id).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(expense::Model)` - The updated expense
    /// - `Err(Error::ExpenseError(NotFound))` - No expense with this ID
    pub async fn update(
        &self,
        expense_id: i32,
        patch: ExpensePatch,
    ) -> Result<expense::Model, Error> {
        let repo = ExpenseRepository::new(self.db);

        let Some(current) = repo.get_by_id(expense_id).await? else {
            return Err(ExpenseError::NotFound(expense_id).into());
        };

        if let Some(amount) = patch.amount {
            if amount <= Decimal::ZERO {
                return Err(Error::Validation {
                    field: "amount",
                    reason: format!("must be positive, got {amount}"),
                });
            }
        }

        let mut active: expense::ActiveModel = current.into();
        if let Some(value) = patch.description {
            active.description = Set(value);
        }
        if let Some(value) = patch.amount {
            active.amount = Set(value);
        }
        if let Some(value) = patch.category {
            active.category = Set(value);
        }
        if let Some(value) = patch.date {
            active.date = Set(value);
        }
        if let Some(value) = patch.vendor {
            active.vendor = Set(Some(value));
        }
        if let Some(value) = patch.receipt_number {
            active.receipt_number = Set(Some(value));
        }
        if let Some(value) = patch.notes {
            active.notes = Set(Some(value));
        }
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(repo.update(active).await?)
    }

    /// Deletes one expense.
    ///
    /// # Returns
    /// - `Ok(true)` - Expense deleted
    /// - `Ok(false)` - No expense with this ID
    pub async fn delete(&self, expense_id: i32) -> Result<bool, Error> {
        let result = ExpenseRepository::new(self.db).delete(expense_id).await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::ExpenseCategory;
    use rentstock_test_utils::prelude::*;
    use rust_decimal_macros::dec;

    use super::ExpenseService;
    use crate::{
        error::{expense::ExpenseError, Error},
        model::expense::{ExpensePatch, NewExpense},
    };

    fn maintenance_expense(amount: rust_decimal::Decimal) -> NewExpense {
        NewExpense {
            description: "Hydraulic hose replacement".to_string(),
            amount,
            category: ExpenseCategory::Maintenance,
            date: None,
            vendor: None,
            receipt_number: None,
            equipment_id: None,
            notes: None,
        }
    }

    /// Expect Ok with the recorded amount and a defaulted date.
    #[tokio::test]
    async fn creates_expense_with_defaulted_date() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Equipment, entity::prelude::Expense)?;

        let service = ExpenseService::new(&test.db);
        let created = service
            .create(maintenance_expense(dec!(120.00)), 1)
            .await
            .unwrap();

        assert_eq!(created.amount, dec!(120.00));
        assert_eq!(created.category, ExpenseCategory::Maintenance);
        assert_eq!(created.created_by, 1);

        Ok(())
    }

    /// Expect a validation error for a non-positive amount.
    #[tokio::test]
    async fn rejects_non_positive_amount() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Equipment, entity::prelude::Expense)?;

        let service = ExpenseService::new(&test.db);
        let result = service.create(maintenance_expense(dec!(0)), 1).await;

        assert!(matches!(
            result,
            Err(Error::Validation { field: "amount", .. })
        ));

        Ok(())
    }

    /// Expect the patch to change only the provided fields.
    #[tokio::test]
    async fn updates_patched_fields_only() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Equipment, entity::prelude::Expense)?;

        let service = ExpenseService::new(&test.db);
        let created = service
            .create(maintenance_expense(dec!(120.00)), 1)
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                ExpensePatch {
                    amount: Some(dec!(150.00)),
                    vendor: Some("HoseCo".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.amount, dec!(150.00));
        assert_eq!(updated.vendor.as_deref(), Some("HoseCo"));
        assert_eq!(updated.description, created.description);

        Ok(())
    }

    /// Expect a not found error when updating a missing expense.
    #[tokio::test]
    async fn errors_for_missing_expense() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Equipment, entity::prelude::Expense)?;

        let service = ExpenseService::new(&test.db);
        let result = service.update(1, ExpensePatch::default()).await;

        assert!(matches!(
            result,
            Err(Error::ExpenseError(ExpenseError::NotFound(1)))
        ));

        Ok(())
    }

    /// Expect Ok(true) on delete and Ok(false) for a second attempt.
    #[tokio::test]
    async fn deletes_expense_once() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Equipment, entity::prelude::Expense)?;

        let service = ExpenseService::new(&test.db);
        let created = service
            .create(maintenance_expense(dec!(120.00)), 1)
            .await
            .unwrap();

        assert!(service.delete(created.id).await.unwrap());
        assert!(!service.delete(created.id).await.unwrap());

        Ok(())
    }
}
