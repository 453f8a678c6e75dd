//! Reminders view-state service.
//!
//! Server ordering is preserved as-is; the screen renders the list in the
//! order it arrives.

use crate::api::reminder_api::ReminderApi;
use crate::model::reminder::{NewReminder, Reminder, ReminderUpdate};
use crate::service::{record, StoreError};

/// View-state for the reminders screen.
pub struct ReminderService<R: ReminderApi> {
    api: R,
    reminders: Vec<Reminder>,
    last_error: Option<String>,
}

impl<R: ReminderApi> ReminderService<R> {
    pub fn new(api: R) -> Self {
        Self {
            api,
            reminders: Vec::new(),
            last_error: None,
        }
    }

    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.last_error = None;
        let reminders = self.api.list_reminders();
        self.reminders = record(&mut self.last_error, "fetch user reminders", reminders)?;
        Ok(())
    }

    pub fn add_reminder(&mut self, new_reminder: &NewReminder) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.api.create_reminder(new_reminder);
        record(&mut self.last_error, "add reminder", result)?;
        self.refresh()
    }

    pub fn edit_reminder(&mut self, update: &ReminderUpdate) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.api.update_reminder(update);
        record(&mut self.last_error, "update reminder", result)?;
        self.refresh()
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
