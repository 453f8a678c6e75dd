//! Project records and project mutation payloads.

use serde::{Deserialize, Serialize};

/// Project as returned by `/projects/userprojects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub user_id: String,
    pub project_name: String,
    pub project_desc: String,
    pub project_created_date: String,
    pub project_due_date: String,
    pub is_completed: bool,
}

/// Creation body for `POST /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub project_name: String,
    pub project_desc: String,
    pub project_due_date: String,
}
