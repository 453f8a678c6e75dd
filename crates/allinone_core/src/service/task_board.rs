//! Task board view-state service.
//!
//! # Responsibility
//! - Hold the tasks-screen state: upcoming/overdue split, project list,
//!   completed history, and the active project filter.
//! - Re-fetch tasks and projects together after every mutation.
//!
//! # Invariants
//! - Tasks are ordered by due date ascending before the split; the split
//!   boundary is "due today or later".
//! - Projects are ordered by name, case-insensitively.
//! - An unparseable due date lands in the overdue bucket.

use crate::api::project_api::ProjectApi;
use crate::api::task_api::TaskApi;
use crate::model::dates::parse_wire_timestamp;
use crate::model::project::{NewProject, Project};
use crate::model::task::{CompletedTask, NewTask, Task, TaskUpdate};
use crate::service::{record, StoreError};
use chrono::{Local, NaiveDate};

/// View-state for the tasks screen.
pub struct TaskBoardService<T: TaskApi, P: ProjectApi> {
    task_api: T,
    project_api: P,
    upcoming: Vec<Task>,
    overdue: Vec<Task>,
    completed: Vec<CompletedTask>,
    projects: Vec<Project>,
    project_filter: Option<String>,
    last_error: Option<String>,
}

impl<T: TaskApi, P: ProjectApi> TaskBoardService<T, P> {
    pub fn new(task_api: T, project_api: P) -> Self {
        Self {
            task_api,
            project_api,
            upcoming: Vec::new(),
            overdue: Vec::new(),
            completed: Vec::new(),
            projects: Vec::new(),
            project_filter: None,
            last_error: None,
        }
    }

    /// Re-fetches tasks and projects, classifying due dates against the
    /// local calendar date.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.refresh_as_of(Local::now().date_naive())
    }

    /// Re-fetches tasks and projects, classifying due dates against `today`.
    pub fn refresh_as_of(&mut self, today: NaiveDate) -> Result<(), StoreError> {
        self.last_error = None;

        let tasks = self.task_api.list_tasks();
        let mut tasks = record(&mut self.last_error, "fetch user tasks", tasks)?;
        let projects = self.project_api.list_projects();
        let mut projects = record(&mut self.last_error, "fetch user projects", projects)?;

        tasks.sort_by(|a, b| {
            let key_a = parse_wire_timestamp(&a.task_due_date);
            let key_b = parse_wire_timestamp(&b.task_due_date);
            (key_a.is_none(), key_a).cmp(&(key_b.is_none(), key_b))
        });
        let (upcoming, overdue): (Vec<Task>, Vec<Task>) = tasks
            .into_iter()
            .partition(|task| task.is_due_on_or_after(today));
        self.upcoming = upcoming;
        self.overdue = overdue;

        projects.sort_by_key(|project| project.project_name.to_lowercase());
        self.projects = projects;

        Ok(())
    }

    /// Re-fetches the completed-task history.
    pub fn refresh_completed(&mut self) -> Result<(), StoreError> {
        self.last_error = None;
        let completed = self.task_api.list_completed_tasks();
        self.completed = record(&mut self.last_error, "fetch completed tasks", completed)?;
        Ok(())
    }

    pub fn add_task(&mut self, new_task: &NewTask) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.task_api.create_task(new_task);
        record(&mut self.last_error, "add task", result)?;
        self.refresh()
    }

    pub fn edit_task(&mut self, update: &TaskUpdate) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.task_api.update_task(update);
        record(&mut self.last_error, "update task", result)?;
        self.refresh()
    }

    pub fn complete_task(&mut self, task_id: &str) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.task_api.complete_task(task_id);
        record(&mut self.last_error, "complete task", result)?;
        self.refresh()
    }

    pub fn add_project(&mut self, new_project: &NewProject) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.project_api.create_project(new_project);
        record(&mut self.last_error, "add project", result)?;
        self.refresh()
    }

    pub fn delete_project(&mut self, project_id: &str) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.project_api.delete_project(project_id);
        record(&mut self.last_error, "delete project", result)?;
        self.refresh()
    }

    /// Tasks due today or later, due date ascending.
    pub fn upcoming(&self) -> &[Task] {
        &self.upcoming
    }

    /// Tasks already past due, due date ascending.
    pub fn overdue(&self) -> &[Task] {
        &self.overdue
    }

    pub fn completed(&self) -> &[CompletedTask] {
        &self.completed
    }

    /// Projects ordered by name.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Resolves a project name for task rows.
    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects
            .iter()
            .find(|project| project.project_id == project_id)
            .map(|project| project.project_name.as_str())
    }

    /// Narrows the visible upcoming list to one project; `None` shows all.
    pub fn set_project_filter(&mut self, project_id: Option<String>) {
        self.project_filter = project_id;
    }

    pub fn project_filter(&self) -> Option<&str> {
        self.project_filter.as_deref()
    }

    /// Upcoming tasks with the project filter applied.
    pub fn visible_upcoming(&self) -> Vec<&Task> {
        match &self.project_filter {
            None => self.upcoming.iter().collect(),
            Some(filter) => self
                .upcoming
                .iter()
                .filter(|task| task.project_id.as_deref() == Some(filter.as_str()))
                .collect(),
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
