//! Zoom join URLs and deep links.
//!
//! # Example
//!
//! ```
//! use zoomlaunch_core::links::{build_join_url, parse_join_url};
//!
//! let url = build_join_url("123 4567 890", Some("abc"));
//! assert_eq!(url, "https://www.zoom.us/j/1234567890?pwd=abc");
//!
//! let creds = parse_join_url(&url).unwrap();
//! assert_eq!(creds.meeting_id, "1234567890");
//! assert_eq!(creds.password.as_deref(), Some("abc"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::format::strip_spaces;

/// Default custom scheme handled by the Zoom desktop client.
pub const DEFAULT_SCHEME: &str = "zoommtg";

/// Regex for Zoom join URLs, anchored at the start of the input.
///
/// Captures the numeric meeting id and, when present, the `pwd` query value
/// up to the next `&` or the end of the string.
static JOIN_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*zoom\.us/j/(\d+)(?:/?\?.*?pwd=(.*?)(?:$|&))?").expect("Invalid join URL regex")
});

/// Meeting credentials extracted from a join URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinCredentials {
    /// Digits of the meeting id.
    pub meeting_id: String,
    /// Password from the `pwd` parameter.
    pub password: Option<String>,
}

/// Builds the browser join URL for a meeting.
///
/// The password is appended verbatim, without URL-encoding.
pub fn build_join_url(meeting_id: &str, password: Option<&str>) -> String {
    let mut url = format!("https://www.zoom.us/j/{}", strip_spaces(meeting_id));
    if let Some(pwd) = password.filter(|p| !p.is_empty()) {
        url.push_str("?pwd=");
        url.push_str(pwd);
    }
    url
}

/// Parses a `zoom.us/j/<id>` join URL.
///
/// Returns `None` when the input is not a join URL. Matching is
/// case-sensitive.
pub fn parse_join_url(url: &str) -> Option<JoinCredentials> {
    let caps = JOIN_URL_REGEX.captures(url)?;
    let meeting_id = caps.get(1)?.as_str().to_string();
    let password = caps
        .get(2)
        .map(|m| m.as_str())
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Some(JoinCredentials {
        meeting_id,
        password,
    })
}

/// Builds the deep link that opens the meeting in the desktop client.
///
/// `zoommtg://zoom.us/join?confno=<id>[&pwd=<password>]`
pub fn build_deep_link(scheme: &str, meeting_id: &str, password: Option<&str>) -> String {
    let mut url = format!(
        "{}://zoom.us/join?confno={}",
        scheme,
        strip_spaces(meeting_id)
    );
    if let Some(pwd) = password.filter(|p| !p.is_empty()) {
        url.push_str("&pwd=");
        url.push_str(pwd);
    }
    url
}
