//! Error types shared between client and server.
//!
//! The `QuotationError` enum covers every failure along the
//! client → server → upstream → database chain. Each hop maps its own library
//! errors into one of the four kinds below so callers can decide what to do
//! with a single `match`.
use std::io;

use thiserror::Error;

use crate::deadline::Stage;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuotationError {
    /// A deadline elapsed before the bounded operation finished.
    #[error("Timeout: {stage} exceeded its {budget_ms}ms budget")]
    Timeout {
        /// Hop whose deadline elapsed.
        stage: Stage,
        /// Budget that was configured for the hop, in milliseconds.
        budget_ms: u128,
    },

    /// The remote side answered with an unexpected status or could not be reached.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The payload was not valid JSON or lacked an expected field.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Writing the quotation to durable storage (database or file) failed.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl QuotationError {
    /// Returns `true` for the `Timeout` kind.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuotationError::Timeout { .. })
    }
}

/// File and socket failures surface while persisting the result.
impl From<io::Error> for QuotationError {
    fn from(err: io::Error) -> Self {
        QuotationError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for QuotationError {
    fn from(err: serde_json::Error) -> Self {
        QuotationError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timeout_message_names_stage_and_budget() {
        let err = QuotationError::Timeout {
            stage: Stage::Persistence,
            budget_ms: Duration::from_millis(10).as_millis(),
        };
        assert_eq!(err.to_string(), "Timeout: persistence exceeded its 10ms budget");
        assert!(err.is_timeout());
    }

    #[test]
    fn json_errors_are_parse_errors() {
        let err: QuotationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, QuotationError::Parse(_)));
    }

    #[test]
    fn io_errors_are_persistence_errors() {
        let err: QuotationError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, QuotationError::Persistence(_)));
    }
}
