use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    errors::AppResult,
    models::domain::NoteFile,
    storage::{load_collection, save_collection, SessionStorage},
};

/// Storage slot holding the saved notes.
pub const NOTES_KEY: &str = "notes";

#[cfg_attr(test, mockall::automock)]
pub trait NoteRepository: Send + Sync {
    fn add_note(&self, note: NoteFile) -> AppResult<NoteFile>;
    fn list_notes(&self) -> Vec<NoteFile>;
    fn get_note(&self, id: &str) -> Option<NoteFile>;
    /// Returns whether a note was removed.
    fn delete_note(&self, id: &str) -> AppResult<bool>;
}

pub struct SessionNoteRepository {
    storage: Arc<dyn SessionStorage>,
    write_lock: Mutex<()>,
}

impl SessionNoteRepository {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Vec<NoteFile> {
        load_collection(self.storage.as_ref(), NOTES_KEY)
    }

    fn save(&self, notes: &[NoteFile]) -> AppResult<()> {
        save_collection(self.storage.as_ref(), NOTES_KEY, notes)
    }
}

impl NoteRepository for SessionNoteRepository {
    fn add_note(&self, note: NoteFile) -> AppResult<NoteFile> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut notes = self.load();
        notes.push(note.clone());
        self.save(&notes)?;

        log::info!("Saved note '{}' ({})", note.name, note.id);
        Ok(note)
    }

    fn list_notes(&self) -> Vec<NoteFile> {
        self.load()
    }

    fn get_note(&self, id: &str) -> Option<NoteFile> {
        self.load().into_iter().find(|n| n.id == id)
    }

    fn delete_note(&self, id: &str) -> AppResult<bool> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut notes = self.load();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        let removed = notes.len() != before;

        if !removed {
            log::warn!("Ignoring delete for unknown note '{}'", id);
            return Ok(false);
        }
        self.save(&notes)?;
        Ok(true)
    }
}
