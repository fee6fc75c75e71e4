//! Error handling for studyhall-store
//!
//! Maps rusqlite failures onto the core taxonomy. Constraint failures are
//! the one recoverable kind; everything else is a persistence error.

use rusqlite::ErrorCode;
use studyhall_core::StudyhallError;

/// Result type alias using StudyhallError
pub type Result<T> = std::result::Result<T, StudyhallError>;

/// Create a core error from rusqlite::Error
///
/// SQLITE_CONSTRAINT failures become `ConstraintViolation` so that create
/// paths can catch them; all other codes become `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> StudyhallError {
    match &err {
        rusqlite::Error::SqliteFailure(ffi_err, _)
            if ffi_err.code == ErrorCode::ConstraintViolation =>
        {
            StudyhallError::ConstraintViolation {
                detail: err.to_string(),
            }
        }
        _ => StudyhallError::Persistence {
            message: err.to_string(),
        },
    }
}

/// Create an IO error for a named operation
pub fn io_error(op: &str, err: std::io::Error) -> StudyhallError {
    StudyhallError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> StudyhallError {
    StudyhallError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> StudyhallError {
    StudyhallError::Persistence {
        message: format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_failure_maps_to_constraint_violation() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();

        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .expect_err("duplicate insert should fail");

        assert!(from_rusqlite(err).is_constraint_violation());
    }

    #[test]
    fn test_other_failure_maps_to_persistence() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn
            .execute("INSERT INTO missing_table VALUES (1)", [])
            .expect_err("insert into missing table should fail");

        let mapped = from_rusqlite(err);
        assert!(!mapped.is_constraint_violation());
        assert_eq!(mapped.code(), "ERR_PERSISTENCE");
    }
}
