//! Quotation HTTP server.
//!
//! On startup it opens (or creates) `quotation.db`, ensures the `quotation` table
//! exists, and listens on `0.0.0.0:8080`. Each `GET /cotacao` fetches USD-BRL from the
//! upstream API within 200ms, stores it within a separate 10ms budget and replies with
//! `{"bid": "<value>"}`. Any failure on that path yields a generic HTTP 500; details
//! only go to the log.
//!
//! Ctrl+C stops accepting connections, lets in-flight requests finish and closes the
//! database pool.
use std::sync::Arc;

use log::{error, info};
use quotation_server::error::ServerError;
use quotation_server::{AppState, ServerConfig, SqliteStore, UpstreamClient, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    init_logger();
    if let Err(e) = run(ServerConfig::default()).await {
        error!("Quotation server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store = SqliteStore::connect(&config.database_url).await?;
    info!("{} quotations already stored", store.count().await?);

    let upstream = UpstreamClient::new(&config.upstream_url, &config.pair_code)?;
    info!("Upstream price source: {}", upstream.url());

    let listener = TcpListener::bind(&config.bind_address).await?;
    let state = AppState::new(Arc::new(store.clone()), upstream, &config);
    serve(listener, state, shutdown_signal()).await?;

    store.close().await;
    info!("Quotation server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
