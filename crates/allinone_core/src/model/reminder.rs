//! Reminder records and reminder mutation payloads.
//!
//! The consumed API exposes list/create/update for reminders; there is no
//! delete endpoint.

use serde::{Deserialize, Serialize};

/// Reminder as returned by `/reminders/userreminders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub reminder_id: String,
    pub user_id: String,
    pub reminder_name: String,
    pub reminder_desc: String,
    pub reminder_datetime: String,
    pub is_completed: bool,
}

/// Creation body for `POST /reminders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReminder {
    pub reminder_datetime: String,
    pub reminder_name: String,
}

/// Update body for `PUT /reminders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderUpdate {
    pub reminder_id: String,
    pub reminder_datetime: String,
    pub reminder_name: String,
}
