//! Core library for the Rentstock equipment-rental backend.
//!
//! Rentstock turns a customer request into a priced quotation, an accepted
//! quotation into an invoice, and a paid invoice into active rentals, with
//! every step mutating a shared pool of per-equipment stock counters
//! (available / reserved / rented / maintenance). This crate contains the
//! stock-reservation lifecycle and its derived bookkeeping; HTTP routing,
//! authentication, and report rendering live in the callers that embed it.
//!
//! Every public service operation runs as one database transaction: either
//! the full entity graph is updated, or nothing is.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

pub use error::Error;
