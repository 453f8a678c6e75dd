//! Core client logic for AllInOne.
//! This crate owns the session lifecycle and the screen-facing data flows;
//! the UI shell on top stays free of HTTP and state details.

pub mod api;
pub mod http;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;

pub use api::auth_api::{AuthApi, HttpAuthApi};
pub use api::note_api::{HttpNoteApi, NoteApi};
pub use api::project_api::{HttpProjectApi, ProjectApi};
pub use api::reminder_api::{HttpReminderApi, ReminderApi};
pub use api::task_api::{HttpTaskApi, TaskApi};
pub use http::{ApiConnection, Envelope, HttpError, HttpResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NewNote, Note, NoteUpdate};
pub use model::project::{NewProject, Project};
pub use model::reminder::{NewReminder, Reminder, ReminderUpdate};
pub use model::task::{CompletedTask, NewTask, Task, TaskUpdate};
pub use model::user::{Credentials, ProfileUpdate, SignupRequest, User};
pub use service::note_service::NoteService;
pub use service::reminder_service::ReminderService;
pub use service::task_board::TaskBoardService;
pub use service::StoreError;
pub use session::{
    GuardOutcome, Navigator, Route, SessionError, SessionGuard, SessionService,
    DEFAULT_POLL_INTERVAL,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
