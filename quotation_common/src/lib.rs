//!
//! Common types and utilities shared by the quotation server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuotationError` used across the workspace.
//! - `result` — handy `Result<T, QuotationError>` alias.
//! - `quotation` — the `Quotation` value and upstream payload decoding.
//! - `deadline` — explicit deadlines threaded through every outbound call.
//! - `net` — hardcoded addresses, paths and time budgets.
#![warn(missing_docs)]
pub mod deadline;
pub mod error;
pub mod net;
pub mod quotation;
pub mod result;

pub use deadline::{Deadline, Stage};
pub use error::QuotationError;
pub use quotation::Quotation;
pub use result::Result;
