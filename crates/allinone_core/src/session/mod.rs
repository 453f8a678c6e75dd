//! Session lifecycle: login/signup/logout flows and the periodic guard.
//!
//! # Responsibility
//! - Hold the authenticated user snapshot and the session use-case APIs.
//! - Decide, on a fixed cadence, whether the shell must redirect to login.
//!
//! # Invariants
//! - The user snapshot only changes through successful API responses.
//! - Guard polling is skipped entirely on auth-exempt routes.

pub mod guard;
pub mod route;
pub mod session_service;

pub use guard::{GuardOutcome, Navigator, SessionGuard, DEFAULT_POLL_INTERVAL};
pub use route::Route;
pub use session_service::{SessionError, SessionService};
