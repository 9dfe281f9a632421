//! Error types for the Rentstock core.
//!
//! Each domain gets its own `thiserror` enum (stock ledger, quotations,
//! invoices, equipment, expenses, configuration); the crate-level [`Error`]
//! aggregates them so service signatures stay uniform. Business-rule
//! violations are always raised before the surrounding transaction commits,
//! so a returned error implies the store was left untouched by the failed
//! unit of work.

pub mod config;
pub mod equipment;
pub mod expense;
pub mod invoice;
pub mod quotation;
pub mod stock;

use thiserror::Error;

use crate::error::{
    config::ConfigError, equipment::EquipmentError, expense::ExpenseError, invoice::InvoiceError,
    quotation::QuotationError, stock::StockError,
};

/// Aggregate error type for the Rentstock core.
///
/// Recoverable business errors (insufficient stock, illegal status
/// transitions, conflicts) carry enough detail for the caller to act on;
/// [`Error::DbErr`] signals an infrastructure failure where no partial write
/// occurred and a retry is safe.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Stock ledger error (insufficient stock, concurrent counter update).
    #[error(transparent)]
    StockError(#[from] StockError),
    /// Quotation error (missing quotation, illegal status transition).
    #[error(transparent)]
    QuotationError(#[from] QuotationError),
    /// Invoice error (missing invoice, conversion preconditions).
    #[error(transparent)]
    InvoiceError(#[from] InvoiceError),
    /// Equipment error (missing equipment).
    #[error(transparent)]
    EquipmentError(#[from] EquipmentError),
    /// Expense error (missing expense).
    #[error(transparent)]
    ExpenseError(#[from] ExpenseError),
    /// Malformed input rejected before any write happened.
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    /// Database error (query failures, connection issues, aborted transactions).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
