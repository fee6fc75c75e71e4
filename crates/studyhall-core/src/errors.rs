use thiserror::Error;

/// Result type alias using StudyhallError
pub type Result<T> = std::result::Result<T, StudyhallError>;

/// Error taxonomy for studyhall operations
///
/// Each variant maps to a stable error code usable for programmatic
/// handling and external API responses. The only failure the persistence
/// layer recovers from is `ConstraintViolation`; everything else
/// propagates to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StudyhallError {
    /// A uniqueness or referential-integrity constraint failed on write
    #[error("Integrity violation: {detail}")]
    ConstraintViolation { detail: String },

    /// Record not found in the backing store
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The backing store reported a non-integrity failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Filesystem access failed (e.g. reading a post image)
    #[error("IO error during {op}: {message}")]
    Io { op: String, message: String },

    /// JSON encoding/decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Caller supplied a value the model rejects
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl StudyhallError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            StudyhallError::ConstraintViolation { .. } => "ERR_CONSTRAINT_VIOLATION",
            StudyhallError::NotFound { .. } => "ERR_NOT_FOUND",
            StudyhallError::Persistence { .. } => "ERR_PERSISTENCE",
            StudyhallError::Io { .. } => "ERR_IO",
            StudyhallError::Serialization { .. } => "ERR_SERIALIZATION",
            StudyhallError::InvalidInput { .. } => "ERR_INVALID_INPUT",
        }
    }

    /// True when this error is a uniqueness/integrity failure
    ///
    /// Create paths treat these as a recoverable "record already exists"
    /// signal rather than a fatal error.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StudyhallError::ConstraintViolation { .. })
    }
}

/// Conversion from serde_json::Error to StudyhallError
impl From<serde_json::Error> for StudyhallError {
    fn from(err: serde_json::Error) -> Self {
        StudyhallError::Serialization {
            message: err.to_string(),
        }
    }
}
