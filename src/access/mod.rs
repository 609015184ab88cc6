pub mod handlers;

use crate::convert::parse_int;

/// Renders a second count as a "D days, H hours, M minutes" phrase, coarsest
/// unit first. Zero means "no limit set" upstream and is rendered as one hour.
/// When days and minutes are both positive the hours slot is printed even if it
/// is zero; existing consumers rely on that exact output.
pub fn format_duration(seconds: i64) -> String {
    let total = if seconds == 0 { 3600 } else { seconds };

    let min = total / 60;
    let hour = min / 60;
    let min = min % 60;
    let day = hour / 24;
    let hour = hour % 24;

    if day > 0 {
        if min > 0 {
            format!("{day} days, {hour} hours, {min} minutes")
        } else if hour > 0 {
            format!("{day} days, {hour} hours")
        } else {
            format!("{day} days")
        }
    } else if hour > 0 {
        if min > 0 {
            format!("{hour} hours, {min} minutes")
        } else {
            format!("{hour} hours")
        }
    } else {
        format!("{min} minutes")
    }
}

/// Parses a minute count and converts it to seconds, defaulting to one minute
/// when the input is not a number.
pub fn access_time_seconds(minutes: &str) -> i64 {
    let min = parse_int(minutes).unwrap_or(1);
    60 * min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rendered_as_one_hour() {
        assert_eq!(format_duration(0), "1 hours");
        assert_eq!(format_duration(3600), "1 hours");
    }

    #[test]
    fn minutes_only() {
        assert_eq!(format_duration(600), "10 minutes");
        assert_eq!(format_duration(59), "0 minutes");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_duration(3600 + 300), "1 hours, 5 minutes");
        assert_eq!(format_duration(2 * 3600), "2 hours");
    }

    #[test]
    fn days_and_hours() {
        assert_eq!(format_duration(90000), "1 days, 1 hours");
        assert_eq!(format_duration(2 * 86400), "2 days");
    }

    #[test]
    fn zero_hours_slot_is_kept_when_minutes_follow_days() {
        assert_eq!(format_duration(86400 + 300), "1 days, 0 hours, 5 minutes");
    }

    #[test]
    fn seconds_are_discarded() {
        assert_eq!(format_duration(600 + 59), "10 minutes");
    }

    #[test]
    fn access_time_parses_minutes() {
        assert_eq!(access_time_seconds("10"), 600);
    }

    #[test]
    fn access_time_defaults_to_one_minute() {
        assert_eq!(access_time_seconds("bad"), 60);
        assert_eq!(access_time_seconds(""), 60);
    }
}
