//! Reminder API contract plus HTTP implementation.
//!
//! The remote surface offers list/create/update only; reminders cannot be
//! deleted through this API.

use crate::http::{ApiConnection, Envelope, HttpResult};
use crate::model::reminder::{NewReminder, Reminder, ReminderUpdate};
use reqwest::Method;

/// Reminder operations against the remote API.
pub trait ReminderApi {
    fn list_reminders(&self) -> HttpResult<Vec<Reminder>>;
    fn create_reminder(&self, new_reminder: &NewReminder) -> HttpResult<()>;
    fn update_reminder(&self, update: &ReminderUpdate) -> HttpResult<()>;
}

/// HTTP-backed reminder API.
pub struct HttpReminderApi<'conn> {
    conn: &'conn ApiConnection,
}

impl<'conn> HttpReminderApi<'conn> {
    pub fn new(conn: &'conn ApiConnection) -> Self {
        Self { conn }
    }
}

impl ReminderApi for HttpReminderApi<'_> {
    fn list_reminders(&self) -> HttpResult<Vec<Reminder>> {
        let envelope: Envelope<Vec<Reminder>> =
            super::fetch_json(self.conn, "/reminders/userreminders")?;
        Ok(envelope.data)
    }

    fn create_reminder(&self, new_reminder: &NewReminder) -> HttpResult<()> {
        super::send_json(self.conn, Method::POST, "/reminders", new_reminder)
    }

    fn update_reminder(&self, update: &ReminderUpdate) -> HttpResult<()> {
        super::send_json(self.conn, Method::PUT, "/reminders", update)
    }
}
