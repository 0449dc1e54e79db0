//! Quotation client: asks the quotation server for the current USD-BRL bid within a
//! fixed budget and writes it to a text file.
//!
//! - `fetcher` — `QuotationFetcher`, the bounded GET to the server.
//! - `writer` — formatting and writing the output file.
//! - `config` — `ClientConfig` built from the shared constants.
#![warn(missing_docs)]
pub mod config;
pub mod fetcher;
pub mod writer;

use log::info;
use quotation_common::{Deadline, Quotation, Result, Stage};

pub use config::ClientConfig;
pub use fetcher::QuotationFetcher;

/// Fetch a quotation under `config.timeout` and save it to `config.output_path`.
///
/// The output file is only opened after a quotation was obtained, so any fetch
/// failure leaves an existing file untouched.
pub async fn fetch_and_save(config: &ClientConfig) -> Result<Quotation> {
    let deadline = Deadline::after(Stage::ClientRequest, config.timeout);
    let fetcher = QuotationFetcher::new(&config.server_url)?;
    let quotation = fetcher.fetch(deadline).await?;
    info!("Received bid {}", quotation.bid);

    writer::save_quotation(&config.output_path, &quotation)?;
    info!("Quotation saved to {}", config.output_path.display());
    Ok(quotation)
}
