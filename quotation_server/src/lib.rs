//! Quotation server: proxies the upstream exchange-rate API, stores every quotation in
//! SQLite and returns it as JSON on `GET /cotacao`.
//!
//! Building blocks:
//! - `upstream` — `UpstreamClient`, one bounded GET against the price source.
//! - `store` — `QuotationStore` seam and the `SqliteStore` implementation.
//! - `receiver` — router, request handler and serve loop.
//! - `config` — `ServerConfig` built from the shared constants.
//! - `error` — request (`ApiError`) and startup (`ServerError`) errors.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod model;
pub mod receiver;
pub mod store;
pub mod upstream;

pub use config::ServerConfig;
pub use receiver::{AppState, build_router, serve};
pub use store::{QuotationStore, SqliteStore};
pub use upstream::UpstreamClient;
