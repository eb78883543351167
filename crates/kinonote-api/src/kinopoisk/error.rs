//! Kinopoisk error taxonomy and transport translation.
//!
//! Translation is lossy on purpose: the technical detail (status line,
//! API error payload, transport failure) is logged for operators here,
//! and only the short user-facing message crosses the crate boundary.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Typed error for all Kinopoisk operations.
///
/// Each variant's `Display` is the short message shown to the end user.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum KinopoiskError {
    /// Input rejected by a validation guard, before any network call.
    #[error("{0}")]
    InvalidInput(String),
    /// Well-formed request that matched nothing.
    #[error("{0}")]
    EmptyResult(String),
    /// Bad or missing API token (HTTP 401/403).
    #[error("API token is invalid or missing")]
    Unauthorized,
    /// Request quota exhausted (HTTP 429).
    #[error("Too many requests, try again later")]
    RateLimited,
    /// The requested resource does not exist (HTTP 404).
    #[error("Nothing found in Kinopoisk")]
    NotFound,
    /// Kinopoisk-side failure (HTTP 5xx).
    #[error("Kinopoisk is temporarily unavailable")]
    ServerError,
    /// No response received (connection or timeout failure).
    #[error("No response from Kinopoisk, check your connection")]
    Network,
    /// Any failure outside the categories above.
    #[error("Unexpected error while contacting Kinopoisk")]
    Unknown,
}

/// Error payload returned by kinopoisk.dev alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    /// HTTP status echoed in the payload.
    #[serde(default, rename = "statusCode")]
    status_code: u16,
    /// Human-readable message from the API.
    #[serde(default)]
    message: String,
}

impl KinopoiskError {
    /// Translates a non-success HTTP response into a category.
    ///
    /// Logs the status and the decoded API message for operators.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(body) {
            tracing::error!(
                status = %status,
                api_status = api_error.status_code,
                message = %api_error.message,
                "Kinopoisk API error"
            );
        } else {
            let preview_len = body.len().min(500);
            tracing::error!(
                status = %status,
                body = body.get(..preview_len).unwrap_or(body),
                "Kinopoisk API error with undecodable body"
            );
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            StatusCode::NOT_FOUND => Self::NotFound,
            s if s.is_server_error() => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Translates a transport-layer failure into a category.
    ///
    /// A failure without any HTTP response (connect, timeout, request
    /// build) maps to `Network`; everything else maps by the embedded
    /// status when present, or falls through to `Unknown`.
    pub(crate) fn from_transport(error: &reqwest::Error) -> Self {
        tracing::error!(error = %error, "Kinopoisk transport failure");

        if error.is_connect() || error.is_timeout() || error.is_request() {
            return Self::Network;
        }
        match error.status() {
            Some(status) => Self::from_status(status, ""),
            None => Self::Unknown,
        }
    }
}
