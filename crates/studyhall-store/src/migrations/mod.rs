//! Migration framework
//!
//! Provides:
//! - Embedded SQL migrations
//! - Idempotent runner with checksum verification

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
