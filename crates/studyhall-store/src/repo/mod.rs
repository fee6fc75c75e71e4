//! Repository layer for persisting domain models to SQLite
//!
//! One repository per record type. Every operation takes the connection
//! handle explicitly; create paths convert integrity violations into
//! `Ok(None)` after logging, everything else propagates.

pub mod posts;
pub mod quiz_questions;
pub mod quiz_scores;
pub mod users;

pub use posts::PostRepo;
pub use quiz_questions::QuizQuestionRepo;
pub use quiz_scores::QuizScoreRepo;
pub use users::UserRepo;
