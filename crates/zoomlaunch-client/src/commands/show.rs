//! `show` command: list all meetings or show one in detail.

use zoomlaunch_core::{Meeting, detail_lines, list_lines};

use crate::error::ClientResult;
use crate::store::meeting_at;

/// Prints the meeting list, or the detail of the meeting at `index`.
pub fn run(meetings: &[Meeting], index: Option<i64>) -> ClientResult<()> {
    for line in render(meetings, index)? {
        println!("{}", line);
    }
    Ok(())
}

/// Renders what `run` prints.
pub fn render(meetings: &[Meeting], index: Option<i64>) -> ClientResult<Vec<String>> {
    match index {
        None => Ok(list_lines(meetings)?),
        Some(index) => {
            let (index, meeting) = meeting_at(meetings, index)?;
            Ok(detail_lines(index, meeting)?)
        }
    }
}
