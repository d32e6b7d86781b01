//! Unified error types for the storefront.
//!
//! "Not found" is never an error here: readers return `Ok(None)` or an empty list for
//! absent or inactive rows. Everything in [`Error`] is an unexpected failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Every failure the storefront can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Store call failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Socket or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An outbound link could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Body sent to the client when a request fails unexpectedly.
#[derive(Debug, Serialize)]
struct FailureBody {
    message: &'static str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FailureBody {
                message: "Terjadi kesalahan pada server",
            }),
        )
            .into_response()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
