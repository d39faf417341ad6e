//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while interpreting meeting data or user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Meeting id is not 10 or 11 digits once spaces are stripped.
    #[error("{id} is not a valid meeting id")]
    InvalidMeetingId { id: String },

    /// Launch argument is neither an index, a meeting id nor a join URL.
    #[error("'{argument}' is not valid")]
    InvalidArgument { argument: String },

    /// Weekly meeting time could not be understood.
    #[error("invalid meeting time: {message}")]
    InvalidSchedule { message: String },
}

impl CoreError {
    /// Creates an invalid meeting id error.
    pub fn invalid_meeting_id(id: impl Into<String>) -> Self {
        Self::InvalidMeetingId { id: id.into() }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
        }
    }

    /// Creates an invalid schedule error.
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }
}
