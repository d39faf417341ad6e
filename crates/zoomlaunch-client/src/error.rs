//! Client error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zoomlaunch_core::CoreError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
///
/// Every variant ends the invocation; `main` reports it once and exits.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The meeting file is not valid JSON (or not a list of meetings).
    #[error("'{}' is not a valid JSON file: {message}", .path.display())]
    ConfigFormat { path: PathBuf, message: String },

    /// The settings file could not be read or parsed.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// A 1-based index outside the stored meetings.
    #[error("'{index}' is not a valid index")]
    InvalidIndex { index: i64 },

    /// No meeting is scheduled around the current time.
    #[error("No scheduled meetings right now (+/- {window_minutes} min)")]
    NoMeetingDue { window_minutes: u32 },

    /// No URI opener is known for this operating system.
    #[error("This operating system is not supported ({os})")]
    UnsupportedPlatform { os: String },

    /// The URI handler is missing or exited with a failure.
    #[error("Cannot open meeting URL \"{uri}\": {reason}")]
    Launch { uri: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid meeting id, launch argument or schedule.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// Creates a meeting file format error.
    pub fn config_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a launch failure.
    pub fn launch(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Launch {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// All user-facing errors share status 2.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ClientError::InvalidIndex { index: 0 }.to_string(),
            "'0' is not a valid index"
        );
        assert_eq!(
            ClientError::NoMeetingDue { window_minutes: 20 }.to_string(),
            "No scheduled meetings right now (+/- 20 min)"
        );
        assert_eq!(
            ClientError::launch("zoommtg://x", "exit status: 4").to_string(),
            "Cannot open meeting URL \"zoommtg://x\": exit status: 4"
        );
    }

    #[test]
    fn core_errors_are_transparent() {
        let err: ClientError = CoreError::invalid_meeting_id("123").into();
        assert_eq!(err.to_string(), "123 is not a valid meeting id");
    }

    #[test]
    fn every_error_exits_with_two() {
        let errors = [
            ClientError::config_format("meetings.json", "expected value"),
            ClientError::config("bad"),
            ClientError::InvalidIndex { index: 4 },
            ClientError::UnsupportedPlatform { os: "plan9".into() },
            ClientError::launch("open", "not found"),
            CoreError::invalid_argument("x").into(),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 2);
        }
    }
}
