//! Client settings built from the hardcoded constants in `quotation_common::net`.
use std::path::PathBuf;
use std::time::Duration;

use quotation_common::net::{self, CLIENT_TIMEOUT, OUTPUT_PATH, SERVER_HOST, SERVER_PORT};

/// Runtime settings for the quotation client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the server's quotation route.
    pub server_url: String,
    /// File the quotation line is written to.
    pub output_path: PathBuf,
    /// Budget for the whole round trip to the server.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: net::quotation_url(SERVER_HOST, SERVER_PORT),
            output_path: PathBuf::from(OUTPUT_PATH),
            timeout: CLIENT_TIMEOUT,
        }
    }
}
