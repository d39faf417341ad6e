//! Meeting store: the JSON meeting file, read once per invocation.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use zoomlaunch_core::Meeting;

use crate::error::{ClientError, ClientResult};

/// Read-only access to the meeting file.
#[derive(Debug, Clone)]
pub struct MeetingStore {
    path: PathBuf,
}

impl MeetingStore {
    /// Creates a store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the meeting file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all meetings in stored order.
    ///
    /// A missing file is an empty list. A file that is not a JSON array of
    /// meetings is a [`ClientError::ConfigFormat`].
    pub fn load(&self) -> ClientResult<Vec<Meeting>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "meeting file not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let meetings: Vec<Meeting> = serde_json::from_str(&content)
            .map_err(|e| ClientError::config_format(&self.path, e.to_string()))?;
        debug!(path = %self.path.display(), count = meetings.len(), "loaded meetings");
        Ok(meetings)
    }
}

/// Looks up a meeting by its 1-based display index.
///
/// Returns the validated index along with the meeting.
pub fn meeting_at(meetings: &[Meeting], index: i64) -> ClientResult<(usize, &Meeting)> {
    usize::try_from(index)
        .ok()
        .filter(|i| (1..=meetings.len()).contains(i))
        .map(|i| (i, &meetings[i - 1]))
        .ok_or(ClientError::InvalidIndex { index })
}
