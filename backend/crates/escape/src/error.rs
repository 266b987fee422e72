//! Escape Error Types
//!
//! Client-core error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Escape-specific result type alias
pub type EscapeResult<T> = Result<T, EscapeError>;

/// Escape-specific error variants
#[derive(Debug, Error)]
pub enum EscapeError {
    /// Participant name blank after trimming
    #[error("Please enter your name to start.")]
    EmptyParticipantName,

    /// Access code blank after trimming
    #[error("Please enter an access code.")]
    EmptyAccessCode,

    /// Server did not recognise the code
    #[error("Invalid Access Code.")]
    InvalidAccessCode(String),

    /// Slug or route outside the catalog
    #[error("Unknown puzzle: {0}")]
    UnknownPuzzle(String),

    /// A catalog needs at least one puzzle
    #[error("Puzzle catalog is empty")]
    EmptyCatalog,

    /// No participant has started a session
    #[error("No active session")]
    NoActiveSession,

    /// The session has already ended
    #[error("The session has ended")]
    SessionEnded,

    /// Score submission attempted before the session ended
    #[error("The session is still running")]
    SessionInProgress,

    /// A submission is already on its way
    #[error("A score submission is already in progress")]
    SubmissionInFlight,

    /// The server answered with a failure envelope
    #[error("{0}")]
    Rejected(String),

    /// Network failure talking to the server
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Progress store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Progress record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EscapeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EscapeError::EmptyParticipantName
            | EscapeError::EmptyAccessCode
            | EscapeError::Rejected(_) => ErrorKind::BadRequest,
            EscapeError::InvalidAccessCode(_) | EscapeError::UnknownPuzzle(_) => {
                ErrorKind::NotFound
            }
            EscapeError::NoActiveSession
            | EscapeError::SessionEnded
            | EscapeError::SessionInProgress
            | EscapeError::SubmissionInFlight => ErrorKind::Conflict,
            EscapeError::Transport(_) => ErrorKind::ServiceUnavailable,
            EscapeError::EmptyCatalog
            | EscapeError::Storage(_)
            | EscapeError::Serialization(_) => ErrorKind::InternalServerError,
        }
    }

    /// Transport failures leave all state intact and may be retried
    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            EscapeError::Transport(e) => {
                tracing::warn!(error = %e, "Gate server unreachable");
            }
            EscapeError::Storage(e) => {
                tracing::error!(error = %e, "Progress store failure");
            }
            EscapeError::Serialization(e) => {
                tracing::error!(error = %e, "Progress encoding failure");
            }
            EscapeError::EmptyCatalog => {
                tracing::error!("Escape room built with an empty catalog");
            }
            _ => {
                tracing::debug!(error = %self, "Escape operation rejected");
            }
        }
    }
}

impl From<EscapeError> for AppError {
    fn from(err: EscapeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            EscapeError::Transport(source) => AppError::new(kind, message)
                .with_hint("Check your connection and try again")
                .with_source(source),
            EscapeError::Storage(source) => AppError::new(kind, message).with_source(source),
            _ => AppError::new(kind, message),
        }
    }
}
