//! NoteStore — in-memory note collection behind a small CRUD trait
//!
//! Handlers only see `dyn NoteStore`, so a persistent backend can replace
//! `MemoryNoteStore` without touching the HTTP layer.

use notekeeper_types::{timestamp, Note, NoteId, NoteInput};
use parking_lot::RwLock;
use strum::{AsRefStr, EnumString};

use crate::error::{NoteError, NoteField};

/// How new note ids are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdStrategy {
    /// Monotonic counter; ids are never reused
    #[default]
    Sequential,
    /// `len + 1`; can hand out an id that is still in use after a delete
    Count,
}

pub trait NoteStore: Send + Sync {
    /// All notes in insertion order
    fn list(&self) -> Vec<Note>;
    fn get(&self, id: NoteId) -> Result<Note, NoteError>;
    fn create(&self, input: NoteInput) -> Result<Note, NoteError>;
    fn update(&self, id: NoteId, input: NoteInput) -> Result<Note, NoteError>;
    /// Returns the id of the removed note
    fn delete(&self, id: NoteId) -> Result<NoteId, NoteError>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trim a field and reject it when missing or blank
fn required(value: Option<&str>, field: NoteField) -> Result<String, NoteError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(NoteError::Validation(field)),
    }
}

/// Validated, trimmed (title, content). Title is checked first.
fn validate(input: &NoteInput) -> Result<(String, String), NoteError> {
    let title = required(input.title.as_deref(), NoteField::Title)?;
    let content = required(input.content.as_deref(), NoteField::Content)?;
    Ok((title, content))
}

struct Inner {
    notes: Vec<Note>,
    next_id: NoteId,
}

pub struct MemoryNoteStore {
    inner: RwLock<Inner>,
    id_strategy: IdStrategy,
}

impl MemoryNoteStore {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self::with_notes(id_strategy, Vec::new())
    }

    /// Start from an existing set of notes; the sequential counter resumes
    /// after the highest id present.
    pub fn with_notes(id_strategy: IdStrategy, notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { notes, next_id }),
            id_strategy,
        }
    }
}

impl NoteStore for MemoryNoteStore {
    fn list(&self) -> Vec<Note> {
        self.inner.read().notes.clone()
    }

    fn get(&self, id: NoteId) -> Result<Note, NoteError> {
        self.inner
            .read()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NoteError::NotFound(id))
    }

    fn create(&self, input: NoteInput) -> Result<Note, NoteError> {
        let (title, content) = validate(&input)?;

        let mut inner = self.inner.write();
        let id = match self.id_strategy {
            IdStrategy::Sequential => inner.next_id,
            IdStrategy::Count => inner.notes.len() as NoteId + 1,
        };
        inner.next_id = inner.next_id.max(id + 1);

        let now = timestamp::now();
        let note = Note {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        };
        inner.notes.push(note.clone());

        log::info!("[NOTES] Created note {}", id);
        Ok(note)
    }

    fn update(&self, id: NoteId, input: NoteInput) -> Result<Note, NoteError> {
        let mut inner = self.inner.write();
        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NoteError::NotFound(id))?;

        let (title, content) = validate(&input)?;
        note.title = title;
        note.content = content;
        note.updated_at = timestamp::now().max(note.created_at);

        log::info!("[NOTES] Updated note {}", id);
        Ok(note.clone())
    }

    fn delete(&self, id: NoteId) -> Result<NoteId, NoteError> {
        let mut inner = self.inner.write();
        let before = inner.notes.len();
        inner.notes.retain(|n| n.id != id);

        if inner.notes.len() == before {
            return Err(NoteError::NotFound(id));
        }

        log::info!("[NOTES] Deleted note {}", id);
        Ok(id)
    }

    fn len(&self) -> usize {
        self.inner.read().notes.len()
    }
}
