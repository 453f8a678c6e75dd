//! Periodic session guard.
//!
//! # Responsibility
//! - Re-validate the session on a fixed cadence while the app is open.
//! - Refresh the user snapshot while the session holds.
//! - Tell the shell to return to the login screen once the session lapses.
//!
//! # Invariants
//! - Auth-exempt routes are never polled.
//! - Any non-200 check response and any transport failure both resolve to a
//!   login redirect.
//! - Guard polls race user-triggered requests; there is no cancellation or
//!   dedup between them.

use crate::api::auth_api::AuthApi;
use crate::session::route::Route;
use crate::session::session_service::SessionService;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cadence used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

const STOP_CHECK_STEP: Duration = Duration::from_millis(200);

/// Result of one guard poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Current route does not require a session; nothing was polled.
    Exempt,
    /// Session holds and the user snapshot was refreshed.
    Authenticated,
    /// Session is gone; the shell must navigate to `Route::Login`.
    RedirectToLogin { reason: String },
}

/// Navigation seam implemented by the host shell.
pub trait Navigator: Send {
    fn current_route(&self) -> Route;
    fn redirect_to_login(&self);
}

/// Fixed-cadence authentication poller.
///
/// Drive it either deterministically via [`SessionGuard::poll_due`] from the
/// shell's own timer, or with the blocking [`SessionGuard::run`] loop on a
/// dedicated thread.
pub struct SessionGuard {
    interval: Duration,
    last_poll_at: Option<Instant>,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_poll_at: None,
        }
    }

    /// Polls once, unconditionally, and records the poll instant.
    pub fn poll<A: AuthApi>(
        &mut self,
        session: &mut SessionService<A>,
        route: Route,
        now: Instant,
    ) -> GuardOutcome {
        self.last_poll_at = Some(now);

        if route.is_auth_exempt() {
            debug!(
                "event=session_guard module=session status=skipped route={}",
                route.as_path()
            );
            return GuardOutcome::Exempt;
        }

        let outcome = match session.auth_check() {
            Ok(true) => match session.refresh_user_details() {
                Ok(()) => GuardOutcome::Authenticated,
                Err(err) => GuardOutcome::RedirectToLogin {
                    reason: err.to_string(),
                },
            },
            Ok(false) => GuardOutcome::RedirectToLogin {
                reason: "session expired or not authenticated".to_string(),
            },
            Err(err) => GuardOutcome::RedirectToLogin {
                reason: format!("auth check failed: {err}"),
            },
        };

        match &outcome {
            GuardOutcome::Authenticated => {
                debug!("event=session_guard module=session status=ok")
            }
            GuardOutcome::RedirectToLogin { reason } => warn!(
                "event=session_guard module=session status=redirect reason={reason}"
            ),
            GuardOutcome::Exempt => {}
        }

        outcome
    }

    /// Polls only when the configured interval has elapsed since the last
    /// poll. The first call always polls.
    pub fn poll_due<A: AuthApi>(
        &mut self,
        session: &mut SessionService<A>,
        route: Route,
        now: Instant,
    ) -> Option<GuardOutcome> {
        let due = match self.last_poll_at {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        };
        due.then(|| self.poll(session, route, now))
    }

    /// Blocking poll loop for shells without their own timer.
    ///
    /// Runs until `stop` is set. The first poll fires immediately; each
    /// redirect outcome is forwarded to the navigator. Intended for a
    /// dedicated thread next to the UI event loop.
    pub fn run<A: AuthApi, N: Navigator>(
        &mut self,
        session: &mut SessionService<A>,
        navigator: &N,
        stop: &AtomicBool,
    ) {
        info!(
            "event=session_guard module=session status=start interval_ms={}",
            self.interval.as_millis()
        );

        while !stop.load(Ordering::Relaxed) {
            let route = navigator.current_route();
            if let Some(GuardOutcome::RedirectToLogin { .. }) =
                self.poll_due(session, route, Instant::now())
            {
                navigator.redirect_to_login();
            }

            let mut waited = Duration::ZERO;
            while waited < self.interval && !stop.load(Ordering::Relaxed) {
                std::thread::sleep(STOP_CHECK_STEP);
                waited += STOP_CHECK_STEP;
            }
        }

        info!("event=session_guard module=session status=stopped");
    }
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}
