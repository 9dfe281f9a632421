//! Business operations.
//!
//! Each public service operation is one atomic unit of work: it opens a
//! transaction, performs every read and write inside it, and commits or rolls
//! back as a whole. The stock ledger in [`stock`] is the one exception: it
//! runs inside the caller's open transaction and never commits on its own,
//! so reservation arithmetic stays atomic with the operation that triggered
//! it.

pub mod equipment;
pub mod expense;
pub mod invoice;
pub mod quotation;
pub mod stock;
