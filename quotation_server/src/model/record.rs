//! Persisted quotation row.
//!
//! A `QuotationRecord` is the store's view of a `Quotation`: the bid plus an
//! auto-incrementing identifier and the UTC time it was inserted. Records are
//! append-only; nothing in the server updates or deletes them.

use chrono::{DateTime, Utc};
use quotation_common::Quotation;
use sqlx::FromRow;

/// One row of the `quotation` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct QuotationRecord {
    /// Auto-incremented row identifier.
    pub id: i64,
    /// Bid exactly as fetched upstream.
    pub bid: String,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
}

impl QuotationRecord {
    /// Quotation value carried by this record.
    pub fn quotation(&self) -> Quotation {
        Quotation::new(self.bid.as_str())
    }
}
