//! Domain models for the quotation server.
//!
//! - `record` — a quotation as persisted by the local store.

pub mod record;
