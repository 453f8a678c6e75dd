use allinone_core::{
    HttpError, HttpResult, NewReminder, Reminder, ReminderApi, ReminderService, ReminderUpdate,
};
use std::cell::{Cell, RefCell};

fn reminder(id: &str, name: &str, datetime: &str) -> Reminder {
    Reminder {
        reminder_id: id.to_string(),
        user_id: "u-1".to_string(),
        reminder_name: name.to_string(),
        reminder_desc: String::new(),
        reminder_datetime: datetime.to_string(),
        is_completed: false,
    }
}

#[derive(Default)]
struct FakeReminderApi {
    reminders: RefCell<Vec<Reminder>>,
    fail_list: Cell<bool>,
}

impl ReminderApi for &FakeReminderApi {
    fn list_reminders(&self) -> HttpResult<Vec<Reminder>> {
        if self.fail_list.get() {
            return Err(HttpError::Api {
                status: 500,
                body: "reminders unavailable".to_string(),
            });
        }
        Ok(self.reminders.borrow().clone())
    }

    fn create_reminder(&self, new_reminder: &NewReminder) -> HttpResult<()> {
        let id = format!("r-{}", self.reminders.borrow().len() + 1);
        self.reminders.borrow_mut().push(reminder(
            &id,
            &new_reminder.reminder_name,
            &new_reminder.reminder_datetime,
        ));
        Ok(())
    }

    fn update_reminder(&self, update: &ReminderUpdate) -> HttpResult<()> {
        let mut reminders = self.reminders.borrow_mut();
        let target = reminders
            .iter_mut()
            .find(|reminder| reminder.reminder_id == update.reminder_id)
            .ok_or(HttpError::Api {
                status: 404,
                body: "reminder not found".to_string(),
            })?;
        target.reminder_name = update.reminder_name.clone();
        target.reminder_datetime = update.reminder_datetime.clone();
        Ok(())
    }
}

#[test]
fn refresh_preserves_server_order() {
    let api = FakeReminderApi::default();
    *api.reminders.borrow_mut() = vec![
        reminder("r-2", "later", "2025-07-01T09:00:00"),
        reminder("r-1", "sooner", "2025-06-01T09:00:00"),
    ];
    let mut service = ReminderService::new(&api);

    service.refresh().unwrap();

    let ids: Vec<_> = service
        .reminders()
        .iter()
        .map(|r| r.reminder_id.as_str())
        .collect();
    assert_eq!(ids, vec!["r-2", "r-1"]);
}

#[test]
fn add_reminder_is_visible_after_refetch() {
    let api = FakeReminderApi::default();
    let mut service = ReminderService::new(&api);
    service.refresh().unwrap();

    service
        .add_reminder(&NewReminder {
            reminder_datetime: "2025-07-01T09:00:00".to_string(),
            reminder_name: "standup".to_string(),
        })
        .unwrap();

    assert_eq!(service.reminders().len(), 1);
    assert_eq!(service.reminders()[0].reminder_name, "standup");
}

#[test]
fn edit_reminder_replaces_name_and_time() {
    let api = FakeReminderApi::default();
    *api.reminders.borrow_mut() = vec![reminder("r-1", "draft", "2025-07-01T09:00:00")];
    let mut service = ReminderService::new(&api);
    service.refresh().unwrap();

    service
        .edit_reminder(&ReminderUpdate {
            reminder_id: "r-1".to_string(),
            reminder_datetime: "2025-07-02T10:00:00".to_string(),
            reminder_name: "retro".to_string(),
        })
        .unwrap();

    assert_eq!(service.reminders()[0].reminder_name, "retro");
    assert_eq!(service.reminders()[0].reminder_datetime, "2025-07-02T10:00:00");
}

#[test]
fn failed_fetch_records_screen_error() {
    let api = FakeReminderApi::default();
    api.fail_list.set(true);
    let mut service = ReminderService::new(&api);

    let err = service.refresh().unwrap_err();

    assert_eq!(err.action(), "fetch user reminders");
    assert!(service
        .last_error()
        .unwrap()
        .contains("failed to fetch user reminders"));
}
