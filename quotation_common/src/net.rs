//! Shared networking constants and helpers used by client and server.
//!
//! There is no configuration file and no CLI: every address, path and time
//! budget the two processes agree on lives here.
use std::time::Duration;

/// TCP port the quotation server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Host the client dials.
pub const SERVER_HOST: &str = "localhost";
/// Route serving the latest quotation.
pub const QUOTATION_ROUTE: &str = "/cotacao";

/// Public exchange-rate endpoint proxied by the server.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Key of the currency pair inside the upstream payload.
pub const PAIR_CODE: &str = "USDBRL";

/// Budget for the whole client round trip.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);
/// Budget for the server's upstream fetch.
pub const SERVER_TIMEOUT: Duration = Duration::from_millis(200);
/// Budget for the server's database insert.
pub const DATABASE_TIMEOUT: Duration = Duration::from_millis(10);

/// Header carrying the caller's remaining budget in milliseconds.
pub const DEADLINE_HEADER: &str = "x-request-deadline-ms";

/// SQLite database file used by the server.
pub const DATABASE_PATH: &str = "quotation.db";
/// Text file the client writes the quotation to.
pub const OUTPUT_PATH: &str = "quotation.txt";

/// Helper to format a host with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Full URL of the quotation route on `host:port`.
pub fn quotation_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTATION_ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_budget_is_tighter_than_fetch_budget() {
        assert!(DATABASE_TIMEOUT < SERVER_TIMEOUT);
        assert!(SERVER_TIMEOUT < CLIENT_TIMEOUT);
    }

    #[test]
    fn builds_quotation_url() {
        assert_eq!(
            quotation_url(SERVER_HOST, SERVER_PORT),
            "http://localhost:8080/cotacao"
        );
    }
}
