//! Task records and task mutation payloads.
//!
//! # Responsibility
//! - Mirror the open-task and completed-task record shapes.
//! - Provide due-date classification used by the task board split.
//!
//! # Invariants
//! - An open task may or may not belong to a project; `project_id` is empty
//!   or absent for standalone tasks.
//! - Completed tasks are a separate server collection and never re-enter the
//!   open list.

use crate::model::dates::parse_wire_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Open task as returned by `/tasks/usertasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub user_id: String,
    pub task_name: String,
    pub task_desc: String,
    pub task_created_date: String,
    pub task_due_date: String,
    /// Empty when the task is not filed under a project.
    #[serde(default)]
    pub project_id: Option<String>,
    pub is_completed: bool,
}

/// Completed task as returned by `/tasks/completedtasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub task_id: String,
    pub user_id: String,
    pub task_name: String,
    pub task_desc: String,
    pub task_created_date: String,
    pub task_due_date: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub task_completed_date: String,
}

/// Creation body for `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub task_name: String,
    pub task_desc: String,
    pub task_due_date: String,
    /// Serialized as `null` for standalone tasks.
    pub project_id: Option<String>,
}

/// Full-record update body for `PUT /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub task_id: String,
    pub task_name: String,
    pub task_desc: String,
    pub task_due_date: String,
    pub project_id: Option<String>,
}

impl Task {
    /// Returns whether this task is due on `today` or later.
    ///
    /// An unparseable due date classifies as overdue, so malformed records
    /// surface on the board instead of disappearing.
    pub fn is_due_on_or_after(&self, today: NaiveDate) -> bool {
        match parse_wire_date(&self.task_due_date) {
            Some(due) => due >= today,
            None => false,
        }
    }
}
