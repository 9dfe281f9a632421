//! Invoice conversion and payment toggle.
//!
//! An accepted quotation converts into exactly one invoice; its line items
//! are copied as independent snapshots so later rate edits on the equipment
//! or quotation cannot change what was billed. Marking the invoice paid
//! creates the rentals and moves reserved stock to rented; marking it unpaid
//! reverts both. Net profit is recomputed by an explicit call whenever the
//! invoice becomes paid.

#[cfg(test)]
mod tests;

use chrono::{Duration, Utc};
use entity::{
    invoice, invoice_item, rental,
    sea_orm_active_enums::{InvoiceStatus, QuotationStatus, RentalStatus},
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::{info, warn};

use crate::{
    data::{
        equipment::EquipmentRepository, invoice::InvoiceRepository,
        quotation::QuotationRepository, rental::RentalRepository,
    },
    error::{invoice::InvoiceError, quotation::QuotationError, Error},
    model::invoice::InvoiceWithItems,
    service::stock::StockService,
    util::{document_number, is_unique_violation},
};

/// Bound on document number retries after a unique constraint collision.
const MAX_NUMBERING_ATTEMPTS: u32 = 3;

/// Days until a freshly converted invoice falls due.
const DEFAULT_DUE_DAYS: i64 = 30;

pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    /// Creates a new instance of [`InvoiceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts an accepted quotation into a pending invoice.
    ///
    /// Assigns the next `INV-NNNNNN` number, copies the customer snapshot and
    /// totals from the quotation and duplicates every quotation item into an
    /// invoice item. The stock reservation stays untouched; it moves to
    /// rented only when the invoice is paid.
    ///
    /// # Arguments
    /// - `quotation_id` - ID of the quotation to convert
    /// - `created_by` - ID of the user performing the conversion
    ///
    /// # Returns
    /// - `Ok(InvoiceWithItems)` - The persisted invoice and its snapshot items
    /// - `Err(Error::QuotationError(NotFound))` - No quotation with this ID
    /// - `Err(Error::InvoiceError(QuotationNotAccepted))` - The quotation is
    ///   not in the accepted status
    /// - `Err(Error::InvoiceError(AlreadyInvoiced))` - An invoice already
    ///   references the quotation
    pub async fn convert_quotation(
        &self,
        quotation_id: i32,
        created_by: i32,
    ) -> Result<InvoiceWithItems, Error> {
        let mut attempt = 1;
        loop {
            match self.try_convert(quotation_id, created_by).await {
                Err(Error::DbErr(err))
                    if attempt < MAX_NUMBERING_ATTEMPTS && is_unique_violation(&err) =>
                {
                    warn!(attempt, "invoice number already taken, retrying");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Loads an invoice with its snapshot items.
    pub async fn get(&self, invoice_id: i32) -> Result<Option<InvoiceWithItems>, Error> {
        let found = InvoiceRepository::new(self.db)
            .get_with_items(invoice_id)
            .await?;

        Ok(found.map(|(invoice, items)| InvoiceWithItems { invoice, items }))
    }

    /// Toggles the paid state of an invoice.
    ///
    /// Marking paid sets `paid_date` and `paid_amount`, creates one rental
    /// per quotation line that does not already have one and commits the
    /// reserved stock to rented. Lines that already carry a rental are
    /// skipped, so repeating the call neither double-commits stock nor
    /// duplicates rentals. Marking unpaid deletes the invoice's rentals and
    /// moves their quantities back to reserved. An invoice without a linked
    /// quotation only changes its status and paid fields.
    ///
    /// # Returns
    /// - `Ok(invoice::Model)` - The invoice after the toggle (unchanged when
    ///   it was already in the requested state)
    /// - `Err(Error::InvoiceError(NotFound))` - No invoice with this ID
    pub async fn set_paid(&self, invoice_id: i32, is_paid: bool) -> Result<invoice::Model, Error> {
        let txn = self.db.begin().await?;

        let invoice_repo = InvoiceRepository::new(&txn);
        let rental_repo = RentalRepository::new(&txn);
        let stock = StockService::new(&txn);

        let Some(invoice) = invoice_repo.get_by_id(invoice_id).await? else {
            return Err(InvoiceError::NotFound(invoice_id).into());
        };

        if is_paid == invoice.is_paid() {
            return Ok(invoice);
        }

        let now = Utc::now().naive_utc();
        let mut active: invoice::ActiveModel = invoice.clone().into();

        if is_paid {
            if let Some(quotation_id) = invoice.quotation_id {
                let quotation_repo = QuotationRepository::new(&txn);
                let Some(quotation) = quotation_repo.get_by_id(quotation_id).await? else {
                    return Err(QuotationError::NotFound(quotation_id).into());
                };
                let items = quotation_repo.items_of(quotation_id).await?;

                for item in &items {
                    let existing = rental_repo
                        .find_by_invoice_and_equipment(invoice.id, item.equipment_id)
                        .await?;
                    if existing.is_some() {
                        // Stock was already committed for this line.
                        continue;
                    }

                    rental_repo
                        .insert(rental::ActiveModel {
                            invoice_id: Set(invoice.id),
                            equipment_id: Set(item.equipment_id),
                            customer_name: Set(invoice.customer_name.clone()),
                            quantity: Set(item.quantity),
                            start_date: Set(quotation.start_date),
                            end_date: Set(quotation.end_date),
                            actual_return_date: Set(None),
                            status: Set(RentalStatus::Active),
                            daily_rate: Set(item.daily_rate),
                            total_amount: Set(item.line_total),
                            security_deposit: Set(Decimal::ZERO),
                            notes: Set(None),
                            created_at: Set(now),
                            updated_at: Set(now),
                            ..Default::default()
                        })
                        .await?;

                    stock.commit_to_rented(item.equipment_id, item.quantity).await?;
                }
            }

            let items = invoice_repo.items_of(invoice.id).await?;
            active.status = Set(InvoiceStatus::Paid);
            active.paid_date = Set(Some(now));
            active.paid_amount = Set(invoice.total);
            active.net_profit = Set(net_profit(&txn, invoice.total, &items).await?);
        } else {
            for rental in rental_repo.find_by_invoice(invoice.id).await? {
                stock
                    .revert_from_rented(rental.equipment_id, rental.quantity)
                    .await?;
            }
            rental_repo.delete_by_invoice(invoice.id).await?;

            active.status = Set(InvoiceStatus::Pending);
            active.paid_date = Set(None);
            active.paid_amount = Set(Decimal::ZERO);
        }

        active.updated_at = Set(now);
        let updated = invoice_repo.update(active).await?;
        txn.commit().await?;

        info!(invoice_id, is_paid, "toggled invoice payment");

        Ok(updated)
    }

    async fn try_convert(
        &self,
        quotation_id: i32,
        created_by: i32,
    ) -> Result<InvoiceWithItems, Error> {
        let txn = self.db.begin().await?;

        let quotation_repo = QuotationRepository::new(&txn);
        let invoice_repo = InvoiceRepository::new(&txn);

        let Some((quotation, quotation_items)) =
            quotation_repo.get_with_items(quotation_id).await?
        else {
            return Err(QuotationError::NotFound(quotation_id).into());
        };

        if quotation.status != QuotationStatus::Accepted {
            return Err(InvoiceError::QuotationNotAccepted {
                quotation_id,
                status: quotation.status,
            }
            .into());
        }

        if invoice_repo
            .find_by_quotation_id(quotation_id)
            .await?
            .is_some()
        {
            return Err(InvoiceError::AlreadyInvoiced { quotation_id }.into());
        }

        let sequence = invoice_repo.count().await? + 1;
        let now = Utc::now().naive_utc();

        let invoice = invoice_repo
            .insert(invoice::ActiveModel {
                invoice_number: Set(document_number("INV", sequence)),
                quotation_id: Set(Some(quotation.id)),
                customer_name: Set(quotation.customer_name.clone()),
                customer_email: Set(quotation.customer_email.clone()),
                customer_phone: Set(quotation.customer_phone.clone()),
                customer_address: Set(quotation.customer_address.clone()),
                subtotal: Set(quotation.subtotal),
                tax_amount: Set(quotation.tax_amount),
                total: Set(quotation.total),
                paid_amount: Set(Decimal::ZERO),
                status: Set(InvoiceStatus::Pending),
                due_date: Set(now + Duration::days(DEFAULT_DUE_DAYS)),
                paid_date: Set(None),
                payment_method: Set(None),
                notes: Set(quotation.notes.clone()),
                net_profit: Set(Decimal::ZERO),
                created_by: Set(created_by),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .await?;

        let mut items = Vec::with_capacity(quotation_items.len());
        for item in &quotation_items {
            items.push(
                invoice_repo
                    .insert_item(invoice_item::ActiveModel {
                        invoice_id: Set(invoice.id),
                        equipment_id: Set(item.equipment_id),
                        quantity: Set(item.quantity),
                        daily_rate: Set(item.daily_rate),
                        rental_days: Set(item.rental_days),
                        line_total: Set(item.line_total),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    })
                    .await?,
            );
        }

        txn.commit().await?;

        info!(
            quotation_id,
            invoice_id = invoice.id,
            invoice_number = %invoice.invoice_number,
            "converted quotation to invoice"
        );

        Ok(InvoiceWithItems { invoice, items })
    }
}

/// Invoice total minus the purchase cost of the billed units.
///
/// Equipment deleted since conversion contributes a buy price of zero rather
/// than failing the recompute.
async fn net_profit<C: ConnectionTrait>(
    db: &C,
    total: Decimal,
    items: &[invoice_item::Model],
) -> Result<Decimal, Error> {
    let equipment_repo = EquipmentRepository::new(db);

    let mut cost = Decimal::ZERO;
    for item in items {
        if let Some(equipment) = equipment_repo.get_by_id(item.equipment_id).await? {
            cost += equipment.buy_price * Decimal::from(item.quantity);
        }
    }

    Ok(total - cost)
}
