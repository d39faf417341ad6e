//! `launch` command: resolve an index, id or URL and open it.

use zoomlaunch_core::{Meeting, resolve_launch_target};

use crate::actions::launch_meeting;
use crate::error::ClientResult;
use crate::opener::UriOpener;

/// Resolves `argument` against the stored meetings and launches it.
pub fn run(
    meetings: &[Meeting],
    opener: &dyn UriOpener,
    scheme: &str,
    argument: &str,
    password: Option<&str>,
) -> ClientResult<()> {
    let target = resolve_launch_target(argument, password, meetings)?;
    launch_meeting(opener, scheme, target.meeting_id(), target.password())
}
