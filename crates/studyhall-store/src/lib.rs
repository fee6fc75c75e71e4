//! Studyhall store - SQLite persistence for the studyhall models
//!
//! Provides:
//! - Connection management for the SQLite gateway
//! - Embedded schema migrations with checksums
//! - Per-entity repositories (users, posts, quiz scores, quiz questions)
//! - Upload-directory image access for post reads
//! - Sample-data seed routine

pub mod db;
pub mod errors;
pub mod images;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use images::ImageStore;
