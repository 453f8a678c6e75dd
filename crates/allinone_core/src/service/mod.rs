//! Per-screen view-state services.
//!
//! # Responsibility
//! - Hold the transient collection state each screen renders.
//! - Apply the fetch-mutate-refetch cycle: every mutation re-fetches the
//!   affected collections in full.
//!
//! # Invariants
//! - Collection state is exactly what the server last returned, after local
//!   ordering rules; no incremental cache updates.
//! - Errors are stringified once with a screen-appropriate prefix and kept
//!   for inline display.

use crate::http::HttpError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_service;
pub mod reminder_service;
pub mod task_board;

/// View-state operation failure: what the screen attempted, and why the
/// request failed.
#[derive(Debug)]
pub struct StoreError {
    action: &'static str,
    source: HttpError,
}

impl StoreError {
    pub(crate) fn new(action: &'static str, source: HttpError) -> Self {
        Self { action, source }
    }

    /// The attempted action, e.g. `"fetch user tasks"`.
    pub fn action(&self) -> &'static str {
        self.action
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to {}: {}", self.action, self.source)
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Converts a failed call into a `StoreError` and records its message for
/// inline display.
pub(crate) fn record<V>(
    last_error: &mut Option<String>,
    action: &'static str,
    result: Result<V, HttpError>,
) -> Result<V, StoreError> {
    result.map_err(|err| {
        let err = StoreError::new(action, err);
        *last_error = Some(err.to_string());
        err
    })
}
