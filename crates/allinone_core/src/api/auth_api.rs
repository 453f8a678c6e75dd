//! Authentication and account API contract plus HTTP implementation.
//!
//! # Responsibility
//! - Provide login/signup/logout/check/details/update operations.
//! - Keep the cookie-session handshake inside the shared connection.
//!
//! # Invariants
//! - `check` reserves `Err` for transport failures; every non-200 status
//!   reads as "not authenticated".
//! - Credentials are write-only: they leave through request bodies and are
//!   never echoed into errors or logs.

use crate::http::{ApiConnection, Envelope, HttpResult};
use crate::model::user::{Credentials, ProfileUpdate, SignupRequest, User};
use reqwest::Method;

/// Account/session operations against the remote API.
pub trait AuthApi {
    fn login(&self, credentials: &Credentials) -> HttpResult<()>;
    fn signup(&self, request: &SignupRequest) -> HttpResult<()>;
    fn logout(&self) -> HttpResult<()>;
    /// Returns whether the current session cookie is still accepted.
    fn check(&self) -> HttpResult<bool>;
    fn user_details(&self) -> HttpResult<User>;
    fn update_profile(&self, update: &ProfileUpdate) -> HttpResult<()>;
}

/// HTTP-backed auth API.
pub struct HttpAuthApi<'conn> {
    conn: &'conn ApiConnection,
}

impl<'conn> HttpAuthApi<'conn> {
    pub fn new(conn: &'conn ApiConnection) -> Self {
        Self { conn }
    }
}

impl AuthApi for HttpAuthApi<'_> {
    fn login(&self, credentials: &Credentials) -> HttpResult<()> {
        super::send_json(self.conn, Method::POST, "/auth/login", credentials)
    }

    fn signup(&self, request: &SignupRequest) -> HttpResult<()> {
        super::send_json(self.conn, Method::POST, "/auth/signup", request)
    }

    fn logout(&self) -> HttpResult<()> {
        super::send_empty(self.conn, Method::POST, "/auth/logout")
    }

    fn check(&self) -> HttpResult<bool> {
        let status = super::fetch_status(self.conn, "/auth/check")?;
        Ok(status == 200)
    }

    fn user_details(&self) -> HttpResult<User> {
        let envelope: Envelope<User> = super::fetch_json(self.conn, "/users/details")?;
        Ok(envelope.data)
    }

    fn update_profile(&self, update: &ProfileUpdate) -> HttpResult<()> {
        super::send_json(self.conn, Method::PUT, "/users/update", update)
    }
}
