//! Domain models for the studyhall tables
//!
//! Each record type maps to one persisted table row. Models hold fields
//! and pure behavior only; all reads and writes go through the store's
//! repository layer.

pub mod post;
pub mod quiz_question;
pub mod quiz_score;
pub mod user;

pub use post::Post;
pub use quiz_question::QuizQuestion;
pub use quiz_score::QuizScore;
pub use user::User;
