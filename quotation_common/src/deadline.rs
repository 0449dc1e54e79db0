//! Explicit deadlines for bounded outbound calls.
//!
//! Every hop in the quotation chain runs under its own `Deadline`, passed as a
//! parameter rather than picked up from ambient state. A deadline records:
//!
//! - the `Stage` it bounds (client call, upstream fetch, persistence),
//! - the configured budget, used in error reports,
//! - the absolute expiry instant.
//!
//! `Deadline::run` drives a future under `tokio::time::timeout_at`. When the
//! deadline elapses the future is dropped, so in-flight HTTP requests and
//! database statements are cancelled rather than left running in the background.
//!
//! Deadlines can be narrowed with a caller's remaining budget (`within`). The
//! budget travels between processes as whole milliseconds in
//! [`DEADLINE_HEADER`](crate::net::DEADLINE_HEADER).
use std::future::Future;
use std::time::Duration;

use strum::Display;
use tokio::time::{Instant, timeout_at};

use crate::error::QuotationError;

/// Hop of the request chain a deadline bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Client round trip to the quotation server.
    ClientRequest,
    /// Server fetch from the upstream price source.
    UpstreamFetch,
    /// Server insert into the local store.
    Persistence,
}

/// Absolute point in time by which a stage must complete.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    stage: Stage,
    budget: Duration,
    at: Instant,
}

impl Deadline {
    /// Start a fresh deadline `budget` from now. Not linked to any other deadline.
    pub fn after(stage: Stage, budget: Duration) -> Self {
        Self {
            stage,
            budget,
            at: Instant::now() + budget,
        }
    }

    /// Narrow this deadline to a caller's remaining budget, if one was given.
    ///
    /// The earlier of the two instants wins; a caller can shorten the budget but never
    /// extend it.
    pub fn within(self, caller_remaining: Option<Duration>) -> Self {
        match caller_remaining {
            Some(remaining) => Self {
                at: self.at.min(Instant::now() + remaining),
                ..self
            },
            None => self,
        }
    }

    /// Time left until expiry; zero once expired.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// Error reported when this deadline elapses.
    pub fn elapsed_error(&self) -> QuotationError {
        QuotationError::Timeout {
            stage: self.stage,
            budget_ms: self.budget.as_millis(),
        }
    }

    /// Drive `operation` to completion or cancel it when the deadline elapses.
    pub async fn run<T, F>(&self, operation: F) -> Result<T, QuotationError>
    where
        F: Future<Output = Result<T, QuotationError>>,
    {
        match timeout_at(self.at, operation).await {
            Ok(result) => result,
            Err(_) => Err(self.elapsed_error()),
        }
    }

    /// Remaining budget encoded for [`DEADLINE_HEADER`](crate::net::DEADLINE_HEADER).
    pub fn header_value(&self) -> String {
        self.remaining().as_millis().to_string()
    }

    /// Parse a remaining budget received in [`DEADLINE_HEADER`](crate::net::DEADLINE_HEADER).
    ///
    /// Returns `None` for anything that is not a whole number of milliseconds.
    pub fn parse_header(value: &str) -> Option<Duration> {
        value.trim().parse::<u64>().ok().map(Duration::from_millis)
    }
}
