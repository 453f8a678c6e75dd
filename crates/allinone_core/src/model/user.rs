//! Account records and auth/profile payloads.
//!
//! # Responsibility
//! - Define the authenticated user snapshot returned by the details endpoint.
//! - Define login/signup/profile-update request bodies.
//!
//! # Invariants
//! - Passwords only ever appear in outbound request payloads, never in
//!   stored state or logs.

use serde::{Deserialize, Serialize};

/// Authenticated account snapshot as returned by `/users/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_name: String,
    pub user_email: String,
    pub user_first_name: String,
    pub user_last_name: String,
}

/// Login request body for `/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub user_name: String,
    pub user_pass: String,
}

/// Signup request body for `/auth/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub user_name: String,
    pub user_email: String,
    pub user_pass: String,
}

/// Profile update body for `/users/update`.
///
/// Carries the full merged form; the server applies it as a whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub user_name: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
}

impl ProfileUpdate {
    /// Returns whether this submission changes anything relative to the
    /// current snapshot.
    pub fn differs_from(&self, user: &User) -> bool {
        self.user_name != user.user_name
            || self.user_first_name != user.user_first_name
            || self.user_last_name != user.user_last_name
            || self.user_email != user.user_email
    }
}
