//! Quotation engine.
//!
//! Creating a quotation reserves stock for every line item; rejecting,
//! expiring or deleting it hands the reservation back. All of it happens in
//! one transaction per operation, so a failing line item rolls back the
//! reservations its siblings already took.

#[cfg(test)]
mod tests;

use chrono::{Duration, Utc};
use entity::{quotation, quotation_item, sea_orm_active_enums::QuotationStatus};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use tracing::{info, warn};

use crate::{
    data::{
        equipment::EquipmentRepository, invoice::InvoiceRepository,
        quotation::QuotationRepository,
    },
    error::{equipment::EquipmentError, quotation::QuotationError, Error},
    model::quotation::{NewQuotation, QuotationPatch, QuotationWithItems},
    service::stock::StockService,
    util::{document_number, is_unique_violation},
};

/// Bound on document number retries after a unique constraint collision.
const MAX_NUMBERING_ATTEMPTS: u32 = 3;

/// Days a quotation stays valid when the input does not say otherwise.
const DEFAULT_VALIDITY_DAYS: i64 = 30;

pub struct QuotationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuotationService<'a> {
    /// Creates a new instance of [`QuotationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a quotation with its line items and reserves stock for each.
    ///
    /// Assigns the next `QUO-NNNNNN` number, defaults each line's rate to the
    /// equipment's daily rate when the input omits one, and computes
    /// subtotal, tax and total from the lines. All inserts and stock
    /// movements share one transaction.
    ///
    /// # Arguments
    /// - `input` - Customer, rental period, tax rate and line items
    /// - `created_by` - ID of the user creating the quotation
    ///
    /// # Returns
    /// - `Ok(QuotationWithItems)` - The persisted quotation and its items
    /// - `Err(Error::Validation)` - Empty item list, non-positive quantity or
    ///   rental days, or an end date before the start date
    /// - `Err(Error::EquipmentError(NotFound))` - A line references missing
    ///   equipment
    /// - `Err(Error::StockError(InsufficientStock))` - A line asked for more
    ///   units than available; no reservation survives
    pub async fn create(
        &self,
        input: NewQuotation,
        created_by: i32,
    ) -> Result<QuotationWithItems, Error> {
        validate_new_quotation(&input)?;

        let mut attempt = 1;
        loop {
            match self.try_create(&input, created_by).await {
                Err(Error::DbErr(err))
                    if attempt < MAX_NUMBERING_ATTEMPTS && is_unique_violation(&err) =>
                {
                    warn!(attempt, "quotation number already taken, retrying");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Loads a quotation with its line items.
    pub async fn get(&self, quotation_id: i32) -> Result<Option<QuotationWithItems>, Error> {
        let found = QuotationRepository::new(self.db)
            .get_with_items(quotation_id)
            .await?;

        Ok(found.map(|(quotation, items)| QuotationWithItems { quotation, items }))
    }

    /// Applies a partial update, enforcing the status state machine.
    ///
    /// Legal transitions are `draft -> sent -> accepted`, and from draft or
    /// sent into `rejected` or `expired`; accepted, rejected and expired are
    /// terminal. Moving into rejected or expired releases every line item's
    /// reservation. Tax amount and total are recomputed from the stored
    /// subtotal on every save.
    ///
    /// # Returns
    /// - `Ok(QuotationWithItems)` - The updated quotation and its items
    /// - `Err(Error::QuotationError(NotFound))` - No quotation with this ID
    /// - `Err(Error::QuotationError(InvalidStatusTransition))` - The
    ///   requested status change is not legal from the current status
    pub async fn update(
        &self,
        quotation_id: i32,
        patch: QuotationPatch,
    ) -> Result<QuotationWithItems, Error> {
        let txn = self.db.begin().await?;
        let repo = QuotationRepository::new(&txn);

        let Some(quotation) = repo.get_by_id(quotation_id).await? else {
            return Err(QuotationError::NotFound(quotation_id).into());
        };
        let items = repo.items_of(quotation_id).await?;

        if let Some(target) = patch.status.clone() {
            // A same-status update is a no-op, not a transition.
            if target != quotation.status {
                if !transition_allowed(&quotation.status, &target) {
                    return Err(QuotationError::InvalidStatusTransition {
                        from: quotation.status,
                        to: target,
                    }
                    .into());
                }

                if matches!(target, QuotationStatus::Rejected | QuotationStatus::Expired) {
                    let stock = StockService::new(&txn);
                    for item in &items {
                        stock.release(item.equipment_id, item.quantity).await?;
                    }
                }
            }
        }

        let tax_rate = patch.tax_rate.unwrap_or(quotation.tax_rate);
        let tax_amount = quotation.subtotal * tax_rate / Decimal::ONE_HUNDRED;

        let mut active: quotation::ActiveModel = quotation.clone().into();
        if let Some(value) = patch.customer_name {
            active.customer_name = Set(value);
        }
        if let Some(value) = patch.customer_email {
            active.customer_email = Set(value);
        }
        if let Some(value) = patch.customer_phone {
            active.customer_phone = Set(Some(value));
        }
        if let Some(value) = patch.customer_address {
            active.customer_address = Set(Some(value));
        }
        if let Some(value) = patch.start_date {
            active.start_date = Set(value);
        }
        if let Some(value) = patch.end_date {
            active.end_date = Set(value);
        }
        if let Some(value) = patch.notes {
            active.notes = Set(Some(value));
        }
        if let Some(value) = patch.valid_until {
            active.valid_until = Set(Some(value));
        }
        if let Some(value) = patch.status {
            active.status = Set(value);
        }
        active.tax_rate = Set(tax_rate);
        active.tax_amount = Set(tax_amount);
        active.total = Set(quotation.subtotal + tax_amount);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = repo.update(active).await?;
        txn.commit().await?;

        Ok(QuotationWithItems {
            quotation: updated,
            items,
        })
    }

    /// Deletes a quotation, releasing its stock reservations first.
    ///
    /// Rejected and expired quotations already handed their reservation back
    /// when they entered the terminal status, so only draft, sent and
    /// accepted quotations release on delete.
    ///
    /// # Returns
    /// - `Ok(true)` - Quotation and items deleted
    /// - `Ok(false)` - No quotation with this ID
    /// - `Err(Error::QuotationError(HasInvoice))` - An invoice references the
    ///   quotation; it cannot be deleted
    pub async fn delete(&self, quotation_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let repo = QuotationRepository::new(&txn);

        let Some(quotation) = repo.get_by_id(quotation_id).await? else {
            return Ok(false);
        };

        if let Some(invoice) = InvoiceRepository::new(&txn)
            .find_by_quotation_id(quotation_id)
            .await?
        {
            return Err(QuotationError::HasInvoice {
                quotation_id,
                invoice_id: invoice.id,
            }
            .into());
        }

        if matches!(
            quotation.status,
            QuotationStatus::Draft | QuotationStatus::Sent | QuotationStatus::Accepted
        ) {
            let items = repo.items_of(quotation_id).await?;
            let stock = StockService::new(&txn);
            for item in &items {
                stock.release(item.equipment_id, item.quantity).await?;
            }
        }

        repo.delete_items(quotation_id).await?;
        repo.delete(quotation_id).await?;
        txn.commit().await?;

        info!(quotation_id, "deleted quotation");

        Ok(true)
    }

    async fn try_create(
        &self,
        input: &NewQuotation,
        created_by: i32,
    ) -> Result<QuotationWithItems, Error> {
        let txn = self.db.begin().await?;

        let quotation_repo = QuotationRepository::new(&txn);
        let equipment_repo = EquipmentRepository::new(&txn);
        let stock = StockService::new(&txn);

        let sequence = quotation_repo.count().await? + 1;
        let now = Utc::now().naive_utc();

        let mut subtotal = Decimal::ZERO;
        let mut lines = Vec::with_capacity(input.items.len());

        for item in &input.items {
            let equipment = equipment_repo
                .get_by_id(item.equipment_id)
                .await?
                .ok_or(EquipmentError::NotFound(item.equipment_id))?;

            let daily_rate = item.daily_rate.unwrap_or(equipment.daily_rate);
            let line_total =
                daily_rate * Decimal::from(item.quantity) * Decimal::from(item.rental_days);
            subtotal += line_total;

            stock.reserve(item.equipment_id, item.quantity).await?;
            lines.push((item, daily_rate, line_total));
        }

        let tax_amount = subtotal * input.tax_rate / Decimal::ONE_HUNDRED;
        let valid_until = input
            .valid_until
            .unwrap_or(now + Duration::days(DEFAULT_VALIDITY_DAYS));

        let quotation = quotation_repo
            .insert(quotation::ActiveModel {
                quotation_number: Set(document_number("QUO", sequence)),
                customer_name: Set(input.customer_name.clone()),
                customer_email: Set(input.customer_email.clone()),
                customer_phone: Set(input.customer_phone.clone()),
                customer_address: Set(input.customer_address.clone()),
                start_date: Set(input.start_date),
                end_date: Set(input.end_date),
                subtotal: Set(subtotal),
                tax_rate: Set(input.tax_rate),
                tax_amount: Set(tax_amount),
                total: Set(subtotal + tax_amount),
                status: Set(QuotationStatus::Draft),
                notes: Set(input.notes.clone()),
                valid_until: Set(Some(valid_until)),
                created_by: Set(created_by),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .await?;

        let mut items = Vec::with_capacity(lines.len());
        for (item, daily_rate, line_total) in lines {
            items.push(
                quotation_repo
                    .insert_item(quotation_item::ActiveModel {
                        quotation_id: Set(quotation.id),
                        equipment_id: Set(item.equipment_id),
                        quantity: Set(item.quantity),
                        daily_rate: Set(daily_rate),
                        rental_days: Set(item.rental_days),
                        line_total: Set(line_total),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    })
                    .await?,
            );
        }

        txn.commit().await?;

        info!(
            quotation_id = quotation.id,
            quotation_number = %quotation.quotation_number,
            items = items.len(),
            "created quotation"
        );

        Ok(QuotationWithItems { quotation, items })
    }
}

fn validate_new_quotation(input: &NewQuotation) -> Result<(), Error> {
    if input.items.is_empty() {
        return Err(Error::Validation {
            field: "items",
            reason: "at least one line item is required".to_string(),
        });
    }

    if input.end_date < input.start_date {
        return Err(Error::Validation {
            field: "end_date",
            reason: "must not be before start_date".to_string(),
        });
    }

    for item in &input.items {
        if item.quantity <= 0 {
            return Err(Error::Validation {
                field: "quantity",
                reason: format!("must be positive, got {}", item.quantity),
            });
        }
        if item.rental_days <= 0 {
            return Err(Error::Validation {
                field: "rental_days",
                reason: format!("must be positive, got {}", item.rental_days),
            });
        }
    }

    Ok(())
}

fn transition_allowed(from: &QuotationStatus, to: &QuotationStatus) -> bool {
    use QuotationStatus::{Accepted, Draft, Expired, Rejected, Sent};

    matches!(
        (from, to),
        (Draft, Sent)
            | (Draft, Rejected)
            | (Draft, Expired)
            | (Sent, Accepted)
            | (Sent, Rejected)
            | (Sent, Expired)
    )
}
