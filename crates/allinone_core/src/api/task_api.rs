//! Task API contract plus HTTP implementation.
//!
//! # Responsibility
//! - Provide the open/completed list and create/update/complete operations.
//!
//! # Invariants
//! - Completing a task is a dedicated endpoint, not a field update.

use crate::http::{ApiConnection, Envelope, HttpResult};
use crate::model::task::{CompletedTask, NewTask, Task, TaskUpdate};
use reqwest::Method;
use serde::Serialize;

/// Task operations against the remote API.
pub trait TaskApi {
    fn list_tasks(&self) -> HttpResult<Vec<Task>>;
    fn list_completed_tasks(&self) -> HttpResult<Vec<CompletedTask>>;
    fn create_task(&self, new_task: &NewTask) -> HttpResult<()>;
    fn update_task(&self, update: &TaskUpdate) -> HttpResult<()>;
    fn complete_task(&self, task_id: &str) -> HttpResult<()>;
}

#[derive(Serialize)]
struct TaskRef<'a> {
    task_id: &'a str,
}

/// HTTP-backed task API.
pub struct HttpTaskApi<'conn> {
    conn: &'conn ApiConnection,
}

impl<'conn> HttpTaskApi<'conn> {
    pub fn new(conn: &'conn ApiConnection) -> Self {
        Self { conn }
    }
}

impl TaskApi for HttpTaskApi<'_> {
    fn list_tasks(&self) -> HttpResult<Vec<Task>> {
        let envelope: Envelope<Vec<Task>> = super::fetch_json(self.conn, "/tasks/usertasks")?;
        Ok(envelope.data)
    }

    fn list_completed_tasks(&self) -> HttpResult<Vec<CompletedTask>> {
        let envelope: Envelope<Vec<CompletedTask>> =
            super::fetch_json(self.conn, "/tasks/completedtasks")?;
        Ok(envelope.data)
    }

    fn create_task(&self, new_task: &NewTask) -> HttpResult<()> {
        super::send_json(self.conn, Method::POST, "/tasks", new_task)
    }

    fn update_task(&self, update: &TaskUpdate) -> HttpResult<()> {
        super::send_json(self.conn, Method::PUT, "/tasks", update)
    }

    fn complete_task(&self, task_id: &str) -> HttpResult<()> {
        super::send_json(self.conn, Method::PUT, "/tasks/complete", &TaskRef { task_id })
    }
}
