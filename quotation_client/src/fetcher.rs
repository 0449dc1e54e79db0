//! Requesting a quotation from the quotation server.
//!
//! One GET, bounded by the caller's `Deadline`. The remaining budget is advertised
//! to the server in the deadline header so it never works longer than the client
//! is willing to wait.
use log::{debug, info};
use quotation_common::net::DEADLINE_HEADER;
use quotation_common::{Deadline, Quotation, QuotationError, Result};
use reqwest::StatusCode;

/// Helper type for requesting quotations from the server.
#[derive(Debug, Clone)]
pub struct QuotationFetcher {
    http: reqwest::Client,
    url: String,
}

impl QuotationFetcher {
    /// Build a fetcher for the quotation route at `url`.
    pub fn new(url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| QuotationError::Upstream(format!("unable to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    /// Fetch one quotation. Everything from connect to the last body byte must finish
    /// before `deadline`.
    pub async fn fetch(&self, deadline: Deadline) -> Result<Quotation> {
        info!("Requesting quotation from {}", self.url);
        deadline
            .run(async {
                let response = self
                    .http
                    .get(&self.url)
                    .header(DEADLINE_HEADER, deadline.header_value())
                    .send()
                    .await
                    .map_err(|e| QuotationError::Upstream(format!("request to {} failed: {}", self.url, e)))?;

                let status = response.status();
                if status != StatusCode::OK {
                    return Err(QuotationError::Upstream(format!(
                        "unexpected status code: {}",
                        status.as_u16()
                    )));
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| QuotationError::Upstream(format!("reading body failed: {}", e)))?;
                debug!("Server replied: {}", String::from_utf8_lossy(&body));

                Quotation::from_json_bytes(&body)
            })
            .await
    }
}
