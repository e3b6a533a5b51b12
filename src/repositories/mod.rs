pub mod note_repository;
pub mod quiz_record_repository;

pub use note_repository::{NoteRepository, SessionNoteRepository, NOTES_KEY};
pub use quiz_record_repository::{QuizRecordRepository, SessionQuizRecordRepository, QUIZZES_KEY};

#[cfg(test)]
pub use note_repository::MockNoteRepository;
#[cfg(test)]
pub use quiz_record_repository::MockQuizRecordRepository;
