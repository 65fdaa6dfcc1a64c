//! Error types with HTTP status code mapping.

use hyper::StatusCode;

use crate::response::{self, HttpResponse};

/// Error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Request errors
    #[error("{0}")]
    BadRequest(String),

    // Store errors. The message is the caller-facing text; the underlying
    // cause is logged where it happens.
    #[error("{0}")]
    Store(&'static str),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    // System errors
    #[error("Invalid address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map error to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) | Error::AddrParse(_) => StatusCode::BAD_REQUEST,

            Error::Store(_)
            | Error::Config(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::Database(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert error into a message envelope response.
    pub fn into_response(self) -> HttpResponse {
        let status = self.status_code();
        let message = match &self {
            Error::Store(message) => (*message).to_string(),
            _ if status.is_server_error() => {
                tracing::error!("Internal error: {self}");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };
        response::message(status, message)
    }
}

/// Result type alias using the registry's Error.
pub type Result<T> = std::result::Result<T, Error>;
