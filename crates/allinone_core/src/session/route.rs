//! Application route table.
//!
//! The shell owns actual navigation; this enum exists so the guard can
//! reason about the current screen and name its redirect target.

/// Navigable screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login screen, also the redirect target on session expiry.
    Login,
    Signup,
    SignupSuccess,
    Dashboard,
    Tasks,
    Notes,
    Reminders,
    Profile,
}

impl Route {
    /// Returns the shell path for this route.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Signup => "/signup",
            Self::SignupSuccess => "/signupsuccess",
            Self::Dashboard => "/dashboard",
            Self::Tasks => "/tasks",
            Self::Notes => "/notes",
            Self::Reminders => "/reminders",
            Self::Profile => "/profile",
        }
    }

    /// Returns whether the session guard skips polling on this route.
    ///
    /// Signup screens are reachable without a session; polling there would
    /// bounce a new user back to login before they can register.
    pub fn is_auth_exempt(&self) -> bool {
        matches!(self, Self::Signup | Self::SignupSuccess)
    }
}
