//! Project API contract plus HTTP implementation.

use crate::http::{ApiConnection, Envelope, HttpResult};
use crate::model::project::{NewProject, Project};
use reqwest::Method;
use serde::Serialize;

/// Project operations against the remote API.
pub trait ProjectApi {
    fn list_projects(&self) -> HttpResult<Vec<Project>>;
    fn create_project(&self, new_project: &NewProject) -> HttpResult<()>;
    fn delete_project(&self, project_id: &str) -> HttpResult<()>;
}

#[derive(Serialize)]
struct ProjectRef<'a> {
    project_id: &'a str,
}

/// HTTP-backed project API.
pub struct HttpProjectApi<'conn> {
    conn: &'conn ApiConnection,
}

impl<'conn> HttpProjectApi<'conn> {
    pub fn new(conn: &'conn ApiConnection) -> Self {
        Self { conn }
    }
}

impl ProjectApi for HttpProjectApi<'_> {
    fn list_projects(&self) -> HttpResult<Vec<Project>> {
        let envelope: Envelope<Vec<Project>> =
            super::fetch_json(self.conn, "/projects/userprojects")?;
        Ok(envelope.data)
    }

    fn create_project(&self, new_project: &NewProject) -> HttpResult<()> {
        super::send_json(self.conn, Method::POST, "/projects", new_project)
    }

    fn delete_project(&self, project_id: &str) -> HttpResult<()> {
        super::send_json(
            self.conn,
            Method::DELETE,
            "/projects",
            &ProjectRef { project_id },
        )
    }
}
