//! Gate Error Types
//!
//! Gate-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
///
/// The `Display` text is the message the game client shows, so it is
/// worded for players.
#[derive(Debug, Error)]
pub enum GateError {
    /// Code absent or blank
    #[error("Access code is required.")]
    MissingAccessCode,

    /// Code not in the directory
    #[error("Invalid Access Code.")]
    InvalidAccessCode,

    /// Username, total time or final score absent
    #[error("Missing submission data.")]
    MissingSubmissionData,

    /// Body is not JSON of the expected shape; the detail is logged only
    #[error("Malformed request body.")]
    MalformedBody(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::InvalidAccessCode => StatusCode::UNAUTHORIZED,
            GateError::MissingAccessCode
            | GateError::MissingSubmissionData
            | GateError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::InvalidAccessCode => ErrorKind::Unauthorized,
            GateError::MissingAccessCode
            | GateError::MissingSubmissionData
            | GateError::MalformedBody(_) => ErrorKind::BadRequest,
            GateError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GateError::Internal(msg) => {
                tracing::error!(message = %msg, "Gate internal error");
            }
            GateError::InvalidAccessCode => {
                tracing::info!("Rejected access code");
            }
            GateError::MalformedBody(detail) => {
                tracing::info!(detail = %detail, "Malformed request body");
            }
            _ => {
                tracing::debug!(error = %self, "Gate request rejected");
            }
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for GateError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        GateError::MalformedBody(rejection.body_text())
    }
}
