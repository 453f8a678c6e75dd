//! Note API contract plus HTTP implementation.

use crate::http::{ApiConnection, Envelope, HttpResult};
use crate::model::note::{NewNote, Note, NoteUpdate};
use reqwest::Method;
use serde::Serialize;

/// Note operations against the remote API.
pub trait NoteApi {
    fn list_notes(&self) -> HttpResult<Vec<Note>>;
    fn create_note(&self, new_note: &NewNote) -> HttpResult<()>;
    fn update_note(&self, update: &NoteUpdate) -> HttpResult<()>;
    fn delete_note(&self, note_id: &str) -> HttpResult<()>;
}

#[derive(Serialize)]
struct NoteRef<'a> {
    note_id: &'a str,
}

/// HTTP-backed note API.
pub struct HttpNoteApi<'conn> {
    conn: &'conn ApiConnection,
}

impl<'conn> HttpNoteApi<'conn> {
    pub fn new(conn: &'conn ApiConnection) -> Self {
        Self { conn }
    }
}

impl NoteApi for HttpNoteApi<'_> {
    fn list_notes(&self) -> HttpResult<Vec<Note>> {
        let envelope: Envelope<Vec<Note>> = super::fetch_json(self.conn, "/notes/usernotes")?;
        Ok(envelope.data)
    }

    fn create_note(&self, new_note: &NewNote) -> HttpResult<()> {
        super::send_json(self.conn, Method::POST, "/notes", new_note)
    }

    fn update_note(&self, update: &NoteUpdate) -> HttpResult<()> {
        super::send_json(self.conn, Method::PUT, "/notes", update)
    }

    fn delete_note(&self, note_id: &str) -> HttpResult<()> {
        super::send_json(self.conn, Method::DELETE, "/notes", &NoteRef { note_id })
    }
}
