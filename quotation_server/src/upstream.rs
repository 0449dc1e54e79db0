//! Client for the upstream exchange-rate API.
//!
//! A single GET per call, no retries and no caching. The whole exchange (connect,
//! headers, body) runs under the caller's `Deadline`; on expiry the request future is
//! dropped and reqwest aborts the connection.
use log::debug;
use quotation_common::{Deadline, Quotation, QuotationError, Result};
use reqwest::StatusCode;

/// Fetches the latest quotation from the upstream price source.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    pair_code: String,
}

impl UpstreamClient {
    /// Build a client for `url`, extracting the bid nested under `pair_code`.
    pub fn new(url: &str, pair_code: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| QuotationError::Upstream(format!("unable to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            url: url.to_string(),
            pair_code: pair_code.to_string(),
        })
    }

    /// Endpoint this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one quotation, bounded by `deadline`.
    pub async fn fetch(&self, deadline: Deadline) -> Result<Quotation> {
        deadline
            .run(async {
                let response = self
                    .http
                    .get(&self.url)
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
                debug!("Upstream replied with {} bytes", body.len());

                Quotation::from_upstream_json(&body, &self.pair_code)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotation_common::Stage;
    use quotation_common::net::PAIR_CODE;
    use std::time::Duration;

    const PATH: &str = "/json/last/USD-BRL";

    fn deadline() -> Deadline {
        Deadline::after(Stage::UpstreamFetch, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn fetches_bid_for_pair() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"USDBRL":{"code":"USD","bid":"5.43"}}"#)
            .create_async()
            .await;

        let client = UpstreamClient::new(&format!("{}{}", server.url(), PATH), PAIR_CODE).unwrap();
        let quotation = client.fetch(deadline()).await.unwrap();

        assert_eq!(quotation.bid, "5.43");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_ok_status_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", PATH)
            .with_status(429)
            .with_body("slow down")
            .create_async()
            .await;

        let client = UpstreamClient::new(&format!("{}{}", server.url(), PATH), PAIR_CODE).unwrap();
        let err = client.fetch(deadline()).await.unwrap_err();

        assert!(matches!(err, QuotationError::Upstream(msg) if msg.contains("429")));
    }

    #[tokio::test]
    async fn missing_pair_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", PATH)
            .with_status(200)
            .with_body(r#"{"EURBRL":{"bid":"6.01"}}"#)
            .create_async()
            .await;

        let client = UpstreamClient::new(&format!("{}{}", server.url(), PATH), PAIR_CODE).unwrap();
        let err = client.fetch(deadline()).await.unwrap_err();

        assert!(matches!(err, QuotationError::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_upstream_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{}{}", port, PATH);
        let client = UpstreamClient::new(&url, PAIR_CODE).unwrap();
        let err = client.fetch(deadline()).await.unwrap_err();

        assert!(matches!(err, QuotationError::Upstream(_)));
    }
}
