//! Session use-case service.
//!
//! # Responsibility
//! - Drive login/signup/logout against the auth API.
//! - Cache the authenticated user snapshot for dashboard/profile screens.
//! - Apply the profile-update submission rules.
//!
//! # Invariants
//! - `user()` reflects the last successful details fetch, nothing else.
//! - A successful logout always clears the snapshot.
//! - `update_profile` refuses a submission in which nothing changed.

use crate::api::auth_api::AuthApi;
use crate::http::{HttpError, HttpResult};
use crate::model::user::{Credentials, ProfileUpdate, SignupRequest, User};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session use-case error.
#[derive(Debug)]
pub enum SessionError {
    LoginFailed(HttpError),
    SignupFailed(HttpError),
    LogoutFailed(HttpError),
    DetailsFetchFailed(HttpError),
    ProfileUpdateFailed(HttpError),
    /// Profile submission matched the current snapshot field for field.
    NoProfileChanges,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginFailed(err) => write!(f, "login failed: {err}"),
            Self::SignupFailed(err) => write!(f, "signup failed: {err}"),
            Self::LogoutFailed(err) => write!(f, "logout failed: {err}"),
            Self::DetailsFetchFailed(err) => write!(f, "failed to fetch user details: {err}"),
            Self::ProfileUpdateFailed(err) => write!(f, "failed to update user details: {err}"),
            Self::NoProfileChanges => write!(f, "no changes detected"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LoginFailed(err)
            | Self::SignupFailed(err)
            | Self::LogoutFailed(err)
            | Self::DetailsFetchFailed(err)
            | Self::ProfileUpdateFailed(err) => Some(err),
            Self::NoProfileChanges => None,
        }
    }
}

/// Session lifecycle service over an auth API implementation.
pub struct SessionService<A: AuthApi> {
    auth: A,
    user: Option<User>,
    last_error: Option<String>,
}

impl<A: AuthApi> SessionService<A> {
    /// Creates a service with an empty session snapshot.
    pub fn new(auth: A) -> Self {
        Self {
            auth,
            user: None,
            last_error: None,
        }
    }

    /// Logs in and immediately fetches the user details snapshot.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        self.last_error = None;
        let credentials = Credentials {
            user_name: username.to_string(),
            user_pass: password.to_string(),
        };

        if let Err(err) = self.auth.login(&credentials) {
            let err = SessionError::LoginFailed(err);
            warn!("event=session_login module=session status=error error={err}");
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        info!("event=session_login module=session status=ok");
        self.refresh_user_details()
    }

    /// Registers a new account. No session is established; the shell lands
    /// on the signup-success screen afterwards.
    pub fn signup(&mut self, username: &str, email: &str, password: &str) -> Result<(), SessionError> {
        self.last_error = None;
        let request = SignupRequest {
            user_name: username.to_string(),
            user_email: email.to_string(),
            user_pass: password.to_string(),
        };

        match self.auth.signup(&request) {
            Ok(()) => {
                info!("event=session_signup module=session status=ok");
                Ok(())
            }
            Err(err) => {
                let err = SessionError::SignupFailed(err);
                warn!("event=session_signup module=session status=error error={err}");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Ends the session; the snapshot is cleared only on success.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.last_error = None;
        match self.auth.logout() {
            Ok(()) => {
                self.user = None;
                info!("event=session_logout module=session status=ok");
                Ok(())
            }
            Err(err) => {
                let err = SessionError::LogoutFailed(err);
                warn!("event=session_logout module=session status=error error={err}");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Replaces the snapshot from `/users/details`.
    pub fn refresh_user_details(&mut self) -> Result<(), SessionError> {
        match self.auth.user_details() {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(err) => {
                let err = SessionError::DetailsFetchFailed(err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Submits the profile form and re-fetches the snapshot.
    ///
    /// # Contract
    /// - A submission identical to the current snapshot is rejected with
    ///   `NoProfileChanges` and issues no request.
    /// - Without a snapshot the submission is sent as-is.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<(), SessionError> {
        self.last_error = None;
        if let Some(user) = &self.user {
            if !update.differs_from(user) {
                let err = SessionError::NoProfileChanges;
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        }

        if let Err(err) = self.auth.update_profile(update) {
            let err = SessionError::ProfileUpdateFailed(err);
            warn!("event=profile_update module=session status=error error={err}");
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        info!("event=profile_update module=session status=ok");
        self.refresh_user_details()
    }

    /// Probes whether the session cookie is still accepted.
    pub fn auth_check(&self) -> HttpResult<bool> {
        self.auth.check()
    }

    /// Last successfully fetched user snapshot.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Last recorded error message for inline display.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
