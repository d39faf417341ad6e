//! `next` command: launch the meeting scheduled around now.

use chrono::NaiveDateTime;
use tracing::info;
use zoomlaunch_core::{Meeting, next_due_within};

use crate::actions::launch_meeting;
use crate::error::{ClientError, ClientResult};
use crate::opener::UriOpener;

/// Launches the first meeting due within `window_minutes` of `now`.
pub fn run(
    meetings: &[Meeting],
    opener: &dyn UriOpener,
    scheme: &str,
    window_minutes: u32,
    now: NaiveDateTime,
) -> ClientResult<()> {
    let meeting = next_due_within(meetings, now, window_minutes)
        .ok_or(ClientError::NoMeetingDue { window_minutes })?;
    info!(name = %meeting.name, "next meeting");
    launch_meeting(opener, scheme, &meeting.id, meeting.password())
}
