//! Error types used by the quotation server.
//!
//! Two surfaces exist:
//! - `ApiError` is what a request handler fails with. Its HTTP rendering is always a
//!   bare 500 with a generic message; the underlying `QuotationError` is only logged.
//! - `ServerError` covers startup and shutdown (binding the listener, opening the store).
use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use quotation_common::QuotationError;
use thiserror::Error;

/// Failure of a single `/cotacao` request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Upstream fetch failed or timed out; nothing was persisted.
    #[error("fetching quotation failed: {0}")]
    Fetch(QuotationError),

    /// Quotation was fetched but could not be persisted in time.
    #[error("saving quotation failed: {0}")]
    Save(QuotationError),
}

impl ApiError {
    /// Message sent to the client. Never includes the underlying cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Fetch(_) => "Error fetching quotation",
            ApiError::Save(_) => "Error saving quotation",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}

/// Fatal errors raised while starting or running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Listener could not be bound or the HTTP server stopped with an I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Store or upstream client could not be initialised.
    #[error(transparent)]
    Quotation(#[from] QuotationError),
}
