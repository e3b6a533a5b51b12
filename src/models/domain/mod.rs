pub mod note;
pub mod question;
pub mod quiz_record;
pub mod quiz_session;
pub mod score_tier;
pub use note::NoteFile;
pub use question::Question;
pub use quiz_record::QuizRecord;
pub use quiz_session::{QuizSession, SessionState};
pub use score_tier::ScoreTier;
