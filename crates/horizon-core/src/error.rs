//! Error types for the agenda library.

use std::path::PathBuf;

use jiff::Timestamp;
use thiserror::Error;

/// Everything an agenda operation can fail with.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Todo not found for the given ID (or not owned by the caller)
    #[error("Todo with ID {id} not found")]
    TodoNotFound { id: u64 },
    /// Candidate list not found for the given ID (or not owned by the caller)
    #[error("List with ID {id} not found")]
    ListNotFound { id: u64 },
    /// Candidate not found for the given ID
    #[error("Candidate with ID {id} not found")]
    CandidateNotFound { id: u64 },
    /// The wheel was spun on a list without candidates
    #[error("List with ID {id} has no candidates to draw from")]
    EmptyList { id: u64 },
    /// The database directory could not be created
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No XDG data directory to place the default database in
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Unparseable timestamp, unknown status, blank text or zero weight
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A normalized window that still does not end after it starts
    #[error("Invalid time range: end {end} is not after start {start}")]
    InvalidRange { start: Timestamp, end: Timestamp },
    /// Invalid window policy, or a database task that never finished
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Half-built [`AgendaError::InvalidInput`] naming the offending field.
///
/// ```rust
/// use horizon_core::AgendaError;
///
/// let err = AgendaError::invalid_input("endAt").with_reason("not an RFC 3339 instant");
/// assert!(err.is_client_error());
/// ```
#[must_use]
pub struct FieldError {
    field: String,
}

impl FieldError {
    pub fn with_reason(self, reason: impl Into<String>) -> AgendaError {
        AgendaError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AgendaError {
    pub fn invalid_input(field: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
        }
    }

    /// True when the caller can fix the request: bad input, a bad window,
    /// an unknown or foreign id, or an empty wheel. Interfaces report these
    /// as bad requests and everything else as internal failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AgendaError::InvalidInput { .. }
                | AgendaError::InvalidRange { .. }
                | AgendaError::TodoNotFound { .. }
                | AgendaError::ListNotFound { .. }
                | AgendaError::CandidateNotFound { .. }
                | AgendaError::EmptyList { .. }
        )
    }
}

/// Attaches what the agenda was doing to a failed SQLite call.
pub trait DatabaseResultExt<T> {
    fn db_context(self, action: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, action: &str) -> Result<T> {
        self.map_err(|source| AgendaError::Database {
            message: action.to_string(),
            source,
        })
    }
}

/// A blocking database task panicked or was cancelled.
pub(crate) fn join_error(e: tokio::task::JoinError) -> AgendaError {
    AgendaError::Configuration {
        message: format!("database task did not complete: {e}"),
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AgendaError>;
