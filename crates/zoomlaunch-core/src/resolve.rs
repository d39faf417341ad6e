//! Classification of `launch` arguments.
//!
//! A launch argument is one of:
//! - an index into the stored meetings (an integer within `1..=count`)
//! - a literal meeting id (any other integer)
//! - a Zoom join URL (anything that is not an integer)
//!
//! An integer inside the index range is always an index, even if the user
//! meant a meeting id.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::format::strip_spaces;
use crate::links::parse_join_url;
use crate::meeting::Meeting;

/// The meeting a launch argument refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget<'a> {
    /// A stored meeting, by 1-based index.
    Index { index: usize, meeting: &'a Meeting },
    /// A meeting id typed on the command line.
    MeetingId {
        meeting_id: String,
        password: Option<String>,
    },
    /// Credentials taken from a join URL.
    JoinUrl {
        meeting_id: String,
        password: Option<String>,
    },
}

impl LaunchTarget<'_> {
    /// Returns the meeting id to launch.
    pub fn meeting_id(&self) -> &str {
        match self {
            Self::Index { meeting, .. } => &meeting.id,
            Self::MeetingId { meeting_id, .. } | Self::JoinUrl { meeting_id, .. } => meeting_id,
        }
    }

    /// Returns the password to launch with.
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Index { meeting, .. } => meeting.password(),
            Self::MeetingId { password, .. } | Self::JoinUrl { password, .. } => {
                password.as_deref()
            }
        }
    }
}

/// Resolves a launch argument against the stored meetings.
///
/// `password` is only used for a literal meeting id; stored meetings carry
/// their own password and URLs embed theirs.
pub fn resolve_launch_target<'a>(
    argument: &str,
    password: Option<&str>,
    meetings: &'a [Meeting],
) -> CoreResult<LaunchTarget<'a>> {
    let stripped = strip_spaces(argument);

    if is_integer(&stripped) {
        if let Some(index) = index_in_range(&stripped, meetings.len()) {
            if password.is_some() {
                debug!(index, "ignoring password argument for stored meeting");
            }
            debug!(index, "launch argument is a meeting index");
            return Ok(LaunchTarget::Index {
                index,
                meeting: &meetings[index - 1],
            });
        }

        let meeting_id = stripped.strip_prefix('+').unwrap_or(&stripped).to_string();
        debug!(meeting_id = %meeting_id, "launch argument is a meeting id");
        return Ok(LaunchTarget::MeetingId {
            meeting_id,
            password: password.filter(|p| !p.is_empty()).map(str::to_string),
        });
    }

    let creds = parse_join_url(argument).ok_or_else(|| CoreError::invalid_argument(argument))?;
    debug!(meeting_id = %creds.meeting_id, "launch argument is a join URL");
    Ok(LaunchTarget::JoinUrl {
        meeting_id: creds.meeting_id,
        password: creds.password,
    })
}

/// An optional sign followed by at least one ASCII digit.
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn index_in_range(value: &str, count: usize) -> Option<usize> {
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    unsigned
        .parse::<usize>()
        .ok()
        .filter(|index| (1..=count).contains(index))
}
