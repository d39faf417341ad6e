//! Selection of the meeting that is due now.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::meeting::Meeting;

/// Default distance, in minutes, between now and a meeting's slot.
pub const DEFAULT_WINDOW_MINUTES: u32 = 20;

/// Returns the first meeting due within [`DEFAULT_WINDOW_MINUTES`] of `now`.
///
/// See [`next_due_within`].
pub fn next_due(meetings: &[Meeting], now: NaiveDateTime) -> Option<&Meeting> {
    next_due_within(meetings, now, DEFAULT_WINDOW_MINUTES)
}

/// Returns the first meeting, in stored order, whose weekly slot is on
/// `now`'s weekday and at most `window_minutes` away from `now`'s time of day.
///
/// The first match wins, not the closest one. The window does not wrap
/// around midnight: a 23:55 slot is not due at 00:05 the next day.
pub fn next_due_within(
    meetings: &[Meeting],
    now: NaiveDateTime,
    window_minutes: u32,
) -> Option<&Meeting> {
    let window = i64::from(window_minutes);
    meetings.iter().find(|meeting| {
        let Some(slot) = meeting.time else {
            return false;
        };
        match slot.minutes_from(now) {
            Some(delta) if delta <= window => {
                debug!(name = %meeting.name, delta, "meeting is due");
                true
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::WeeklySlot;
    use chrono::NaiveDate;

    /// 2024-01-01 is a Monday.
    fn monday(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn scheduled(name: &str, weekday: u32, h: u32, min: u32) -> Meeting {
        Meeting::new("1234567890", name).with_time(WeeklySlot::new(weekday, h, min).unwrap())
    }

    #[test]
    fn due_within_twenty_minutes() {
        let meetings = vec![scheduled("Standup", 1, 10, 0)];
        assert_eq!(next_due(&meetings, monday(10, 15)).unwrap().name, "Standup");
        assert_eq!(next_due(&meetings, monday(9, 40)).unwrap().name, "Standup");
        assert_eq!(next_due(&meetings, monday(10, 20)).unwrap().name, "Standup");
    }

    #[test]
    fn not_due_outside_window() {
        let meetings = vec![scheduled("Standup", 1, 10, 0)];
        assert!(next_due(&meetings, monday(10, 25)).is_none());
        assert!(next_due(&meetings, monday(9, 39)).is_none());
    }

    #[test]
    fn weekday_must_match() {
        let meetings = vec![scheduled("Tuesday sync", 2, 10, 0)];
        assert!(next_due(&meetings, monday(10, 0)).is_none());
    }

    #[test]
    fn unscheduled_meetings_are_skipped() {
        let meetings = vec![
            Meeting::new("1111111111", "Adhoc"),
            scheduled("Standup", 1, 10, 0),
        ];
        assert_eq!(next_due(&meetings, monday(10, 5)).unwrap().name, "Standup");
    }

    #[test]
    fn first_match_wins_over_closest() {
        let meetings = vec![
            scheduled("Early", 1, 9, 50),
            scheduled("Exact", 1, 10, 0),
        ];
        assert_eq!(next_due(&meetings, monday(10, 0)).unwrap().name, "Early");
    }

    #[test]
    fn window_does_not_wrap_midnight() {
        let meetings = vec![scheduled("Late", 1, 23, 55)];
        // Tuesday 00:05, ten real minutes later.
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert!(next_due(&meetings, now).is_none());
    }

    #[test]
    fn custom_window() {
        let meetings = vec![scheduled("Standup", 1, 10, 0)];
        assert!(next_due_within(&meetings, monday(10, 25), 30).is_some());
        assert!(next_due_within(&meetings, monday(10, 5), 0).is_none());
        assert!(next_due_within(&meetings, monday(10, 0), 0).is_some());
    }

    #[test]
    fn empty_list() {
        assert!(next_due(&[], monday(10, 0)).is_none());
    }
}
