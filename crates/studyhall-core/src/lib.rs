//! Studyhall core - domain models for the studyhall persistence layer
//!
//! Provides:
//! - Record types (User, Post, QuizScore, QuizQuestion)
//! - Password hashing with diagnostic-safe accessors
//! - Canonical error taxonomy
//! - Logging initialization

pub mod errors;
pub mod logging;
pub mod model;
pub mod password;

// Re-export key types
pub use errors::{Result, StudyhallError};
pub use model::{Post, QuizQuestion, QuizScore, User};
