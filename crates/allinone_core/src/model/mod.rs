//! Wire-facing domain records.
//!
//! # Responsibility
//! - Mirror the flat server record shapes consumed by the client screens.
//! - Define the JSON payload types submitted by mutations.
//!
//! # Invariants
//! - Identifiers are server-issued opaque strings; the client never mints one.
//! - Date fields stay ISO strings end to end; parsing happens only in
//!   ordering/classification helpers.

pub mod dates;
pub mod note;
pub mod project;
pub mod reminder;
pub mod task;
pub mod user;
