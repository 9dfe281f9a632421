//! Small shared helpers.

use sea_orm::{DbErr, SqlErr};

/// Width of the numeric part of generated document numbers.
const DOCUMENT_NUMBER_PAD: usize = 6;

/// Format a sequential document number such as `QUO-000001` or `INV-000042`.
///
/// The sequence value is derived from a count of prior rows at creation time;
/// the creating service retries with the next value when the unique
/// constraint on the number column rejects a candidate.
pub fn document_number(prefix: &str, seq: u64) -> String {
    format!("{prefix}-{seq:0pad$}", pad = DOCUMENT_NUMBER_PAD)
}

/// Whether a database error is a unique constraint violation.
///
/// Document numbering treats this as "candidate already taken" and retries
/// with a fresh sequence value.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
