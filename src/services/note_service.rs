use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::NoteFile,
        dto::{request::NoteRequest, response::DeleteResponse},
    },
    repositories::NoteRepository,
};

pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }

    pub fn list_notes(&self) -> Vec<NoteFile> {
        self.repository.list_notes()
    }

    pub fn get_note(&self, id: &str) -> AppResult<NoteFile> {
        self.repository
            .get_note(id)
            .ok_or_else(|| AppError::NotFound(format!("Note with id '{}' not found", id)))
    }

    pub fn add_note(&self, request: NoteRequest) -> AppResult<NoteFile> {
        request.validate()?;
        self.repository.add_note(NoteFile::from(request))
    }

    pub fn delete_note(&self, id: &str) -> AppResult<DeleteResponse> {
        let deleted = self.repository.delete_note(id)?;
        let message = if deleted {
            "Note deleted successfully".to_string()
        } else {
            format!("No note with id '{}'", id)
        };

        Ok(DeleteResponse { deleted, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::{MockNoteRepository, SessionNoteRepository},
        storage::MemorySessionStorage,
    };

    fn service() -> NoteService {
        NoteService::new(Arc::new(SessionNoteRepository::new(Arc::new(
            MemorySessionStorage::new(),
        ))))
    }

    fn request(name: &str, content: &str) -> NoteRequest {
        NoteRequest {
            name: name.to_string(),
            content: content.to_string(),
            example_questions: None,
        }
    }

    #[test]
    fn add_then_get_note() {
        let service = service();

        let saved = service.add_note(request("Biology", "Cells")).unwrap();

        assert_eq!(service.get_note(&saved.id).unwrap().name, "Biology");
        assert_eq!(service.list_notes().len(), 1);
    }

    #[test]
    fn empty_content_is_rejected_before_storing() {
        let mut repository = MockNoteRepository::new();
        repository.expect_add_note().never();
        let service = NoteService::new(Arc::new(repository));

        let result = service.add_note(request("Biology", ""));

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn unknown_note_is_not_found() {
        assert!(matches!(service().get_note("nope"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let service = service();
        let saved = service.add_note(request("Biology", "Cells")).unwrap();

        assert!(service.delete_note(&saved.id).unwrap().deleted);
        assert!(!service.delete_note(&saved.id).unwrap().deleted);
        assert!(service.list_notes().is_empty());
    }
}
