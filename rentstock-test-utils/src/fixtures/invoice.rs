//! Invoice fixtures for tests.

use chrono::{Duration, Utc};
use entity::{invoice, sea_orm_active_enums::InvoiceStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Insert a pending invoice that is not linked to any quotation.
///
/// Used to exercise payment toggling where no stock or rental side effects
/// are expected.
pub async fn insert_standalone_invoice<C: ConnectionTrait>(
    db: &C,
    invoice_number: &str,
    total: Decimal,
) -> Result<invoice::Model, DbErr> {
    let now = Utc::now().naive_utc();

    invoice::ActiveModel {
        invoice_number: ActiveValue::Set(invoice_number.to_string()),
        quotation_id: ActiveValue::Set(None),
        customer_name: ActiveValue::Set("Test Customer".to_string()),
        customer_email: ActiveValue::Set("customer@example.com".to_string()),
        customer_phone: ActiveValue::Set(None),
        customer_address: ActiveValue::Set(None),
        subtotal: ActiveValue::Set(total),
        tax_amount: ActiveValue::Set(Decimal::ZERO),
        total: ActiveValue::Set(total),
        paid_amount: ActiveValue::Set(Decimal::ZERO),
        status: ActiveValue::Set(InvoiceStatus::Pending),
        due_date: ActiveValue::Set(now + Duration::days(30)),
        paid_date: ActiveValue::Set(None),
        payment_method: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        net_profit: ActiveValue::Set(Decimal::ZERO),
        created_by: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
