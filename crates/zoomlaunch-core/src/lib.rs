//! Core types: meetings, ids, links, resolution, schedule

pub mod error;
pub mod format;
pub mod links;
pub mod meeting;
pub mod resolve;
pub mod schedule;
pub mod tracing;

pub use error::{CoreError, CoreResult};
pub use format::{detail_lines, format_meeting_id, list_lines, strip_spaces};
pub use links::{build_deep_link, build_join_url, parse_join_url, JoinCredentials, DEFAULT_SCHEME};
pub use meeting::{Meeting, WeeklySlot};
pub use resolve::{resolve_launch_target, LaunchTarget};
pub use schedule::{next_due, next_due_within, DEFAULT_WINDOW_MINUTES};
pub use self::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
