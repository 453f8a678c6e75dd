//! HTTP transport bootstrap and error taxonomy.
//!
//! # Responsibility
//! - Build and configure the shared cookie-carrying HTTP client.
//! - Define the error type shared by every remote call.
//!
//! # Invariants
//! - All requests go through one `ApiConnection`, so the session cookie jar
//!   is shared across auth and resource calls.
//! - Response bodies and credentials never appear in log events.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod connect;

pub use connect::{ApiConnection, BASE_URL_ENV_VAR};

pub type HttpResult<T> = Result<T, HttpError>;

/// Error for remote API calls.
#[derive(Debug)]
pub enum HttpError {
    /// Connection, timeout, or protocol-level failure.
    Transport(reqwest::Error),
    /// Server answered with a non-success status; carries the body text.
    Api { status: u16, body: String },
    /// The configured base URL is unusable.
    InvalidBaseUrl(String),
    /// Response body did not match the expected shape.
    Decode(serde_json::Error),
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Api { status, body } => {
                if body.is_empty() {
                    write!(f, "server responded with status {status}")
                } else {
                    write!(f, "server responded with status {status}: {body}")
                }
            }
            Self::InvalidBaseUrl(message) => write!(f, "invalid API base URL: {message}"),
            Self::Decode(err) => write!(f, "unexpected response body: {err}"),
        }
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Api { .. } => None,
            Self::InvalidBaseUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Standard `{ "data": ... }` response wrapper used by list and detail
/// endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}
