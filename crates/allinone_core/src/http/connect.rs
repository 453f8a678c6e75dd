//! Connection bootstrap for the remote API.
//!
//! # Responsibility
//! - Validate and normalize the configured base URL.
//! - Build the blocking HTTP client with cookie jar and request timeout.
//!
//! # Invariants
//! - Returned connections always carry an enabled cookie store.
//! - Endpoint paths are joined against a base URL without a trailing slash.

use super::{HttpError, HttpResult};
use log::{error, info};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable naming the deployment API endpoint.
pub const BASE_URL_ENV_VAR: &str = "ALLINONE_API_BASE_URL";

/// Shared connection to the remote API.
///
/// Cheap to borrow; every API implementation holds a reference so all calls
/// share one cookie jar and one client pool.
pub struct ApiConnection {
    base_url: String,
    client: Client,
}

impl ApiConnection {
    /// Connects against an explicit base URL.
    ///
    /// # Errors
    /// - `InvalidBaseUrl` when the URL is empty, unparseable, or not
    ///   `http`/`https`.
    /// - `Transport` when the HTTP client cannot be constructed.
    pub fn connect(base_url: &str) -> HttpResult<Self> {
        let base_url = match normalize_base_url(base_url) {
            Ok(normalized) => normalized,
            Err(err) => {
                error!("event=api_connect module=http status=error error={err}");
                return Err(err);
            }
        };

        let client = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        info!("event=api_connect module=http status=ok base_url={base_url}");
        Ok(Self { base_url, client })
    }

    /// Connects using the base URL from `ALLINONE_API_BASE_URL`.
    pub fn connect_from_env() -> HttpResult<Self> {
        match std::env::var(BASE_URL_ENV_VAR) {
            Ok(value) => Self::connect(&value),
            Err(_) => {
                let err = HttpError::InvalidBaseUrl(format!("{BASE_URL_ENV_VAR} is not set"));
                error!("event=api_connect module=http status=error error={err}");
                Err(err)
            }
        }
    }

    /// Returns the absolute URL for an endpoint path starting with `/`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'));
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the normalized base URL this connection talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn normalize_base_url(value: &str) -> HttpResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HttpError::InvalidBaseUrl("base URL is empty".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|err| HttpError::InvalidBaseUrl(format!("`{trimmed}`: {err}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(HttpError::InvalidBaseUrl(format!(
            "`{trimmed}`: unsupported scheme `{}`",
            parsed.scheme()
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
