//! Meeting actions: hand a meeting to the desktop client.

use tracing::info;
use zoomlaunch_core::build_deep_link;

use crate::error::ClientResult;
use crate::opener::UriOpener;

/// Opens the meeting in the desktop client through its deep link.
///
/// Returns once the opener command has exited; the client itself starts
/// independently.
pub fn launch_meeting(
    opener: &dyn UriOpener,
    scheme: &str,
    meeting_id: &str,
    password: Option<&str>,
) -> ClientResult<()> {
    let url = build_deep_link(scheme, meeting_id, password);
    info!(meeting_id, has_password = password.is_some(), "launching meeting");
    opener.open(&url)
}
