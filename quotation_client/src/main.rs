//! Quotation Client — requests the current USD-BRL bid from the local quotation server
//! and writes it to `quotation.txt` as `Dólar: <bid>`.
//!
//! The whole round trip must complete within 300ms. Any failure (timeout, bad status,
//! malformed body, file write) is logged and terminates the process with exit code 1;
//! nothing is retried and no partial output is written.
//!
//! Usage:
//! ```bash
//! RUST_LOG=debug quotation_client
//! ```
use log::error;
use quotation_client::{ClientConfig, fetch_and_save};

#[tokio::main]
async fn main() {
    init_logger();
    if let Err(e) = fetch_and_save(&ClientConfig::default()).await {
        error!("Quotation client failed: {}", e);
        std::process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
