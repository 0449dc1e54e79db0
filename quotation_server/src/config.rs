//! Server settings built from the hardcoded constants in `quotation_common::net`.
//!
//! The struct exists so the store location, upstream endpoint and time budgets are
//! handed to the server explicitly; tests build their own instance.
use std::time::Duration;

use quotation_common::net::{
    self, DATABASE_PATH, DATABASE_TIMEOUT, PAIR_CODE, SERVER_PORT, SERVER_TIMEOUT, UPSTREAM_URL,
};

/// Runtime settings for the quotation server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_address: String,
    /// Upstream exchange-rate endpoint.
    pub upstream_url: String,
    /// Pair code the bid is nested under in the upstream payload.
    pub pair_code: String,
    /// SQLite connection URL.
    pub database_url: String,
    /// Budget for the upstream fetch.
    pub server_timeout: Duration,
    /// Budget for the database insert.
    pub database_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: net::addr("0.0.0.0", SERVER_PORT),
            upstream_url: UPSTREAM_URL.to_string(),
            pair_code: PAIR_CODE.to_string(),
            database_url: format!("sqlite://{}", DATABASE_PATH),
            server_timeout: SERVER_TIMEOUT,
            database_timeout: DATABASE_TIMEOUT,
        }
    }
}
