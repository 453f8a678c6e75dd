//! Notes view-state service.
//!
//! # Responsibility
//! - Hold the notes-screen collection, ordered by creation date ascending.
//! - Re-fetch the full list after add/edit/delete.

use crate::api::note_api::NoteApi;
use crate::model::dates::parse_wire_timestamp;
use crate::model::note::{NewNote, Note, NoteUpdate};
use crate::service::{record, StoreError};

/// View-state for the notes screen.
pub struct NoteService<N: NoteApi> {
    api: N,
    notes: Vec<Note>,
    last_error: Option<String>,
}

impl<N: NoteApi> NoteService<N> {
    pub fn new(api: N) -> Self {
        Self {
            api,
            notes: Vec::new(),
            last_error: None,
        }
    }

    /// Re-fetches the note list, oldest first.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.last_error = None;
        let notes = self.api.list_notes();
        let mut notes = record(&mut self.last_error, "fetch user notes", notes)?;
        notes.sort_by(|a, b| {
            let key_a = parse_wire_timestamp(&a.note_created_date);
            let key_b = parse_wire_timestamp(&b.note_created_date);
            (key_a.is_none(), key_a).cmp(&(key_b.is_none(), key_b))
        });
        self.notes = notes;
        Ok(())
    }

    pub fn add_note(&mut self, new_note: &NewNote) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.api.create_note(new_note);
        record(&mut self.last_error, "add note", result)?;
        self.refresh()
    }

    pub fn edit_note(&mut self, update: &NoteUpdate) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.api.update_note(update);
        record(&mut self.last_error, "update note", result)?;
        self.refresh()
    }

    pub fn delete_note(&mut self, note_id: &str) -> Result<(), StoreError> {
        self.last_error = None;
        let result = self.api.delete_note(note_id);
        record(&mut self.last_error, "delete note", result)?;
        self.refresh()
    }

    /// Notes ordered by creation date ascending.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
