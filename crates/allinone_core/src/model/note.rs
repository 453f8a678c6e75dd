//! Note records and note mutation payloads.

use serde::{Deserialize, Serialize};

/// Note as returned by `/notes/usernotes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: String,
    pub user_id: String,
    pub note_title: String,
    pub note_content: String,
    pub note_created_date: String,
}

/// Creation body for `POST /notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub note_title: String,
    pub note_content: String,
}

/// Full-content update body for `PUT /notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteUpdate {
    pub note_id: String,
    pub note_title: String,
    pub note_content: String,
}
