//! HTTP front of the quotation server.
//!
//! `build_router` wires the single `GET /cotacao` route to `quotation_handler` with an
//! explicitly constructed `AppState`; there is no global router or shared connection.
//!
//! Per request the handler runs two independent deadlines:
//! - the upstream fetch gets `server_timeout` (200ms), narrowed by the caller's
//!   advertised budget when the client sends one;
//! - the insert gets a fresh `database_timeout` (10ms) that starts after the fetch and is
//!   not derived from the first deadline.
//!
//! The response is only written after the insert attempt finishes. A failed insert
//! fails the request even though a valid quotation is in hand.
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use quotation_common::net::{DEADLINE_HEADER, QUOTATION_ROUTE};
use quotation_common::{Deadline, Quotation, Stage};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ApiError, ServerError};
use crate::store::QuotationStore;
use crate::upstream::UpstreamClient;

/// Dependencies shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Where quotations are persisted.
    pub store: Arc<dyn QuotationStore>,
    /// Upstream price source.
    pub upstream: Arc<UpstreamClient>,
    /// Budget for the upstream fetch.
    pub server_timeout: Duration,
    /// Budget for the insert.
    pub database_timeout: Duration,
}

impl AppState {
    /// Assemble the state from its collaborators and the budgets in `config`.
    pub fn new(
        store: Arc<dyn QuotationStore>,
        upstream: UpstreamClient,
        config: &ServerConfig,
    ) -> Self {
        Self {
            store,
            upstream: Arc::new(upstream),
            server_timeout: config.server_timeout,
            database_timeout: config.database_timeout,
        }
    }
}

/// Route table of the server.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(QUOTATION_ROUTE, get(quotation_handler))
        .with_state(state)
}

/// `GET /cotacao`: fetch upstream, persist, reply with `{"bid": "..."}`.
pub async fn quotation_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Quotation>, ApiError> {
    let caller_budget = headers
        .get(DEADLINE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(Deadline::parse_header);

    let fetch_deadline =
        Deadline::after(Stage::UpstreamFetch, state.server_timeout).within(caller_budget);
    let quotation = state
        .upstream
        .fetch(fetch_deadline)
        .await
        .map_err(ApiError::Fetch)?;

    let persist_deadline = Deadline::after(Stage::Persistence, state.database_timeout);
    let id = state
        .store
        .insert(&quotation, persist_deadline)
        .await
        .map_err(ApiError::Save)?;

    info!("Served quotation bid={} (row {})", quotation.bid, id);
    Ok(Json(quotation))
}

/// Serve `state` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Quotation server is started on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
