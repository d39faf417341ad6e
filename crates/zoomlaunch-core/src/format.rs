//! Display formatting for meeting ids, lists and details.

use crate::error::{CoreError, CoreResult};
use crate::links::build_join_url;
use crate::meeting::Meeting;

/// Removes every space from an identifier.
pub fn strip_spaces(value: &str) -> String {
    value.replace(' ', "")
}

/// Groups a meeting id for display.
///
/// - 10 digits: `XXX XXX XXXX` (with a leading space when `pad` is set, so
///   it lines up with 11-digit ids in a list)
/// - 11 digits: `XXX XXXX XXXX`
///
/// Any other length, or a non-digit character, is an invalid id.
pub fn format_meeting_id(id: &str, pad: bool) -> CoreResult<String> {
    let digits = strip_spaces(id);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_meeting_id(digits));
    }

    match digits.len() {
        11 => Ok(format!(
            "{} {} {}",
            &digits[0..3],
            &digits[3..7],
            &digits[7..11]
        )),
        10 => Ok(format!(
            "{}{} {} {}",
            if pad { " " } else { "" },
            &digits[0..3],
            &digits[3..6],
            &digits[6..10]
        )),
        _ => Err(CoreError::invalid_meeting_id(digits)),
    }
}

/// Renders one line per meeting: bracketed 1-based index, padded id, name.
pub fn list_lines(meetings: &[Meeting]) -> CoreResult<Vec<String>> {
    let width = (meetings.len() + 1).to_string().len() + 2;
    meetings
        .iter()
        .enumerate()
        .map(|(i, meeting)| -> CoreResult<String> {
            let index = format!("[{}]", i + 1);
            let id = format_meeting_id(&meeting.id, true)?;
            Ok(format!("{index:>width$}  {id}  {}", meeting.name))
        })
        .collect()
}

/// Renders the detail view of the meeting shown at `index`.
pub fn detail_lines(index: usize, meeting: &Meeting) -> CoreResult<Vec<String>> {
    let password = meeting.password();
    Ok(vec![
        format!("Index:       {index}"),
        format!("Name:        {}", meeting.name),
        format!("Meeting ID:  {}", format_meeting_id(&meeting.id, false)?),
        format!("Password:    {}", password.unwrap_or_default()),
        format!("Join URL:    {}", build_join_url(&meeting.id, password)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    mod meeting_id {
        use super::*;

        #[test]
        fn groups_eleven_digits() {
            let formatted = format_meeting_id("12345678901", false).unwrap();
            assert_eq!(formatted, "123 4567 8901");
            assert_eq!(formatted.matches(' ').count(), 2);
        }

        #[test]
        fn groups_ten_digits() {
            assert_eq!(format_meeting_id("1234567890", false).unwrap(), "123 456 7890");
        }

        #[test]
        fn pads_ten_digits_only() {
            assert_eq!(format_meeting_id("1234567890", true).unwrap(), " 123 456 7890");
            assert_eq!(format_meeting_id("12345678901", true).unwrap(), "123 4567 8901");
        }

        #[test]
        fn strips_embedded_spaces() {
            assert_eq!(format_meeting_id("123 4567 8901", false).unwrap(), "123 4567 8901");
            assert_eq!(format_meeting_id(" 12 34 56 78 90 ", false).unwrap(), "123 456 7890");
        }

        #[test]
        fn rejects_more_than_eleven_digits() {
            let err = format_meeting_id("123456789012", false).unwrap_err();
            assert_eq!(err, CoreError::invalid_meeting_id("123456789012"));
            assert_eq!(err.to_string(), "123456789012 is not a valid meeting id");
        }

        #[test]
        fn rejects_short_ids() {
            assert!(matches!(
                format_meeting_id("123456789", false),
                Err(CoreError::InvalidMeetingId { .. })
            ));
            assert!(format_meeting_id("", false).is_err());
        }

        #[test]
        fn rejects_non_digits() {
            assert!(format_meeting_id("12345abcde", false).is_err());
        }
    }

    mod listing {
        use super::*;

        #[test]
        fn empty_list_renders_nothing() {
            assert!(list_lines(&[]).unwrap().is_empty());
        }

        #[test]
        fn aligns_ten_and_eleven_digit_ids() {
            let meetings = vec![
                Meeting::new("12345678901", "Standup"),
                Meeting::new("123 456 7890", "Retro"),
                Meeting::new(9876543210_u64.to_string(), "Office hours"),
            ];
            let output = list_lines(&meetings).unwrap().join("\n");
            insta::assert_snapshot!(output, @r"
            [1]  123 4567 8901  Standup
            [2]   123 456 7890  Retro
            [3]   987 654 3210  Office hours
            ");
        }

        #[test]
        fn index_column_widens_with_count() {
            let meetings: Vec<Meeting> = (0..9)
                .map(|i| Meeting::new("1234567890", format!("m{i}")))
                .collect();
            let lines = list_lines(&meetings).unwrap();
            // count + 1 = 10 has two digits, so the column is four wide.
            assert_eq!(lines[0], " [1]   123 456 7890  m0");
            assert_eq!(lines[8], " [9]   123 456 7890  m8");
        }

        #[test]
        fn invalid_id_fails_the_listing() {
            let meetings = vec![Meeting::new("1234567890123", "Too long")];
            assert!(list_lines(&meetings).is_err());
        }
    }

    mod detail {
        use super::*;

        #[test]
        fn renders_meeting_with_password() {
            let meeting = Meeting::new("12345678901", "Standup").with_password("abc");
            let lines = detail_lines(2, &meeting).unwrap();
            assert_eq!(
                lines,
                vec![
                    "Index:       2",
                    "Name:        Standup",
                    "Meeting ID:  123 4567 8901",
                    "Password:    abc",
                    "Join URL:    https://www.zoom.us/j/12345678901?pwd=abc",
                ]
            );
        }

        #[test]
        fn renders_empty_password() {
            let meeting = Meeting::new("123 456 7890", "Retro");
            let lines = detail_lines(1, &meeting).unwrap();
            assert_eq!(lines[3], "Password:    ");
            assert_eq!(lines[4], "Join URL:    https://www.zoom.us/j/1234567890");
        }
    }
}
