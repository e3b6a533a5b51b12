pub mod health_handler;
pub mod note_handler;
pub mod quiz_handler;
pub mod session_handler;

use actix_web::web;

pub use health_handler::health_check;

/// Registers every REST route on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::generate_quiz)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::delete_quiz)
        .service(quiz_handler::get_history)
        .service(note_handler::list_notes)
        .service(note_handler::create_note)
        .service(note_handler::get_note)
        .service(note_handler::delete_note)
        .service(note_handler::generate_from_note)
        .service(session_handler::start_session)
        .service(session_handler::get_session)
        .service(session_handler::abandon_session)
        .service(session_handler::select_answer)
        .service(session_handler::reveal_answer)
        .service(session_handler::advance)
        .service(session_handler::go_back)
        .service(session_handler::retry);
}
