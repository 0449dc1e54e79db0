//! Quotation data model and JSON helpers.
//!
//! A `Quotation` carries a single `bid` kept verbatim as text, so the value the
//! upstream reports is exactly the value stored, served and written to disk.
//! This module also decodes the upstream payload, which nests the quotation
//! under a currency pair code.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuotationError;

/// Exchange rate quotation for one currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    /// Buy-side rate as reported upstream (e.g. `"5.43"`).
    pub bid: String,
}

impl Quotation {
    /// Create a quotation from a bid value.
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }

    /// Decode the upstream payload and extract the quotation stored under `pair_code`.
    ///
    /// The payload is a JSON object keyed by pair code, e.g.
    /// `{"USDBRL": {"bid": "5.43", ...}}`. Other pairs and extra fields are ignored.
    pub fn from_upstream_json(body: &[u8], pair_code: &str) -> Result<Quotation, QuotationError> {
        let mut pairs: HashMap<String, Value> = serde_json::from_slice(body)?;
        let entry = pairs.remove(pair_code).ok_or_else(|| {
            QuotationError::Parse(format!("exchange rate {} not found in response", pair_code))
        })?;
        let quotation: Quotation = serde_json::from_value(entry)?;
        Ok(quotation)
    }

    /// Decode a quotation served as `{"bid": "<value>"}`.
    pub fn from_json_bytes(body: &[u8]) -> Result<Quotation, QuotationError> {
        let fields: HashMap<String, Value> = serde_json::from_slice(body)?;
        match fields.get("bid") {
            Some(Value::String(bid)) => Ok(Quotation::new(bid.as_str())),
            Some(other) => Err(QuotationError::Parse(format!("bid is not a string: {}", other))),
            None => Err(QuotationError::Parse("bid not found in quotation".to_string())),
        }
    }

    /// Line written to the client's output file.
    pub fn to_file_line(&self) -> String {
        format!("Dólar: {}\n", self.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::PAIR_CODE;

    #[test]
    fn extracts_bid_from_upstream_payload() {
        let body = br#"{"USDBRL":{"code":"USD","codein":"BRL","bid":"5.43","ask":"5.44"}}"#;
        let quotation = Quotation::from_upstream_json(body, PAIR_CODE).unwrap();
        assert_eq!(quotation, Quotation::new("5.43"));
    }

    #[test]
    fn missing_pair_code_is_a_parse_error() {
        let body = br#"{"EURBRL":{"bid":"6.01"}}"#;
        let err = Quotation::from_upstream_json(body, PAIR_CODE).unwrap_err();
        assert!(matches!(err, QuotationError::Parse(msg) if msg.contains("USDBRL")));
    }

    #[test]
    fn missing_bid_in_pair_is_a_parse_error() {
        let body = br#"{"USDBRL":{"ask":"5.44"}}"#;
        let err = Quotation::from_upstream_json(body, PAIR_CODE).unwrap_err();
        assert!(matches!(err, QuotationError::Parse(_)));
    }

    #[test]
    fn malformed_upstream_body_is_a_parse_error() {
        let err = Quotation::from_upstream_json(b"<html>busy</html>", PAIR_CODE).unwrap_err();
        assert!(matches!(err, QuotationError::Parse(_)));
    }

    #[test]
    fn decodes_served_quotation() {
        let quotation = Quotation::from_json_bytes(br#"{"bid":"5.43"}"#).unwrap();
        assert_eq!(quotation.bid, "5.43");
    }

    #[test]
    fn served_quotation_without_bid_is_a_parse_error() {
        let err = Quotation::from_json_bytes(br#"{"ask":"5.44"}"#).unwrap_err();
        assert!(matches!(err, QuotationError::Parse(msg) if msg.contains("bid not found")));
    }

    #[test]
    fn numeric_bid_is_rejected() {
        let err = Quotation::from_json_bytes(br#"{"bid":5.43}"#).unwrap_err();
        assert!(matches!(err, QuotationError::Parse(_)));
    }

    #[test]
    fn file_line_matches_fixed_format() {
        assert_eq!(Quotation::new("5.43").to_file_line(), "Dólar: 5.43\n");
    }
}
