//! Remote API contracts and HTTP implementations.
//!
//! # Responsibility
//! - Define use-case oriented API access contracts, one trait per resource.
//! - Keep request/response wire details inside this layer.
//!
//! # Invariants
//! - Every call reports `event=api_request` with method, path, and duration.
//! - Non-success responses become `HttpError::Api` carrying the body text;
//!   the body is never written to the log, only the status.

use crate::http::{ApiConnection, HttpError, HttpResult};
use log::{debug, error};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

pub mod auth_api;
pub mod note_api;
pub mod project_api;
pub mod reminder_api;
pub mod task_api;

/// GET `path` and decode the JSON body into `T`.
pub(crate) fn fetch_json<T: DeserializeOwned>(conn: &ApiConnection, path: &str) -> HttpResult<T> {
    let started_at = Instant::now();
    let result = (|| {
        let response = conn.client().get(conn.endpoint(path)).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(HttpError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str::<T>(&body)?)
    })();
    finish(Method::GET, path, started_at, result)
}

/// GET `path` and return only the response status code.
pub(crate) fn fetch_status(conn: &ApiConnection, path: &str) -> HttpResult<u16> {
    let started_at = Instant::now();
    let result = (|| {
        let response = conn.client().get(conn.endpoint(path)).send()?;
        Ok(response.status().as_u16())
    })();
    finish(Method::GET, path, started_at, result)
}

/// Send a JSON body with the given method; the response body is ignored on
/// success.
pub(crate) fn send_json<B: Serialize>(
    conn: &ApiConnection,
    method: Method,
    path: &str,
    body: &B,
) -> HttpResult<()> {
    let started_at = Instant::now();
    let result = (|| {
        let response = conn
            .client()
            .request(method.clone(), conn.endpoint(path))
            .json(body)
            .send()?;
        ensure_success(response)
    })();
    finish(method, path, started_at, result)
}

/// Send a bodyless request with the given method.
pub(crate) fn send_empty(conn: &ApiConnection, method: Method, path: &str) -> HttpResult<()> {
    let started_at = Instant::now();
    let result = (|| {
        let response = conn
            .client()
            .request(method.clone(), conn.endpoint(path))
            .send()?;
        ensure_success(response)
    })();
    finish(method, path, started_at, result)
}

fn ensure_success(response: reqwest::blocking::Response) -> HttpResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text()?;
    Err(HttpError::Api {
        status: status.as_u16(),
        body,
    })
}

fn finish<T>(
    method: Method,
    path: &str,
    started_at: Instant,
    result: HttpResult<T>,
) -> HttpResult<T> {
    let duration_ms = started_at.elapsed().as_millis();
    match &result {
        Ok(_) => debug!(
            "event=api_request module=api status=ok method={method} path={path} duration_ms={duration_ms}"
        ),
        Err(HttpError::Api { status, .. }) => error!(
            "event=api_request module=api status=error method={method} path={path} duration_ms={duration_ms} error_code=api_status http_status={status}"
        ),
        Err(err) => error!(
            "event=api_request module=api status=error method={method} path={path} duration_ms={duration_ms} error={err}"
        ),
    }
    result
}
