//! Meeting records.
//!
//! A meeting file is a JSON array of objects:
//!
//! ```json
//! [
//!   { "id": "123 4567 8901", "name": "Standup", "password": "s3cret", "time": [1, "09:30"] },
//!   { "id": 9876543210, "name": "Office hours" }
//! ]
//! ```
//!
//! `id` may be a string or a number, `password` and `time` are optional.
//! `time` is a weekly slot: ISO weekday (1 = Monday .. 7 = Sunday) and a
//! 24-hour `HH:MM` local time.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// A stored meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Meeting id as written in the file (may contain spaces).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Display label.
    pub name: String,

    /// Meeting password, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Weekly recurrence, if the meeting has a fixed slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WeeklySlot>,
}

impl Meeting {
    /// Creates a meeting without password or schedule.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password: None,
            time: None,
        }
    }

    /// Builder: set the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Builder: set the weekly slot.
    #[must_use]
    pub fn with_time(mut self, slot: WeeklySlot) -> Self {
        self.time = Some(slot);
        self
    }

    /// Returns the password, treating an empty string as no password.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Accepts both `"1234567890"` and `1234567890` for the id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A single weekly occurrence: a weekday and a wall-clock time.
///
/// Serialized as `[iso_weekday, "HH:MM"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, String)", into = "(u32, String)")]
pub struct WeeklySlot {
    weekday: Weekday,
    time: NaiveTime,
}

impl WeeklySlot {
    /// Creates a slot from an ISO weekday (1 = Monday .. 7 = Sunday) and hour/minute.
    pub fn new(iso_weekday: u32, hour: u32, minute: u32) -> Result<Self, CoreError> {
        let weekday = weekday_from_iso(iso_weekday)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            CoreError::invalid_schedule(format!("{hour:02}:{minute:02} is not a valid time"))
        })?;
        Ok(Self { weekday, time })
    }

    /// Returns the weekday of the slot.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the wall-clock time of the slot.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Minutes between the slot and `now`, if `now` falls on the slot's weekday.
    ///
    /// Only hours and minutes are compared, within the same calendar day.
    pub fn minutes_from(&self, now: NaiveDateTime) -> Option<i64> {
        if now.weekday() != self.weekday {
            return None;
        }
        let slot = minute_of_day(self.time);
        let current = minute_of_day(now.time());
        Some((current - slot).abs())
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

fn weekday_from_iso(iso_weekday: u32) -> Result<Weekday, CoreError> {
    iso_weekday
        .checked_sub(1)
        .and_then(|i| WEEKDAYS.get(i as usize).copied())
        .ok_or_else(|| {
            CoreError::invalid_schedule(format!(
                "weekday {iso_weekday} is out of range (expected 1-7)"
            ))
        })
}

impl TryFrom<(u32, String)> for WeeklySlot {
    type Error = CoreError;

    fn try_from((iso_weekday, hhmm): (u32, String)) -> Result<Self, Self::Error> {
        let weekday = weekday_from_iso(iso_weekday)?;
        let time = NaiveTime::parse_from_str(hhmm.trim(), "%H:%M").map_err(|e| {
            CoreError::invalid_schedule(format!("'{hhmm}' is not a HH:MM time: {e}"))
        })?;
        Ok(Self { weekday, time })
    }
}

impl From<WeeklySlot> for (u32, String) {
    fn from(slot: WeeklySlot) -> Self {
        (
            slot.weekday.number_from_monday(),
            slot.time.format("%H:%M").to_string(),
        )
    }
}
