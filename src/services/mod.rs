pub mod generation_service;
pub mod history_service;
pub mod note_service;
pub mod quiz_service;
pub mod session_service;
