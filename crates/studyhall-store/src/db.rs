//! Database connection management
//!
//! Opens and configures SQLite connections. All repository operations
//! take one of these connections as the gateway handle; no ambient
//! global session exists.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
///
/// Foreign keys must be enabled per connection or the posts→users
/// reference is not enforced. WAL mode is skipped for in-memory
/// databases, where it does not apply.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    // journal_mode reports the resulting mode back as a row; in-memory
    // databases stay on "memory", which is fine.
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))
        .map_err(from_rusqlite)?;

    Ok(())
}
