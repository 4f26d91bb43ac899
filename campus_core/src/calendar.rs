//! Weekday resolution for "today" / "tomorrow" style queries.
//!
//! Lookups that depend on the calendar take explicit `Weekday` or
//! `NaiveDate` parameters; only these helpers touch the local clock.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Lowercase English name of a weekday, matching the timetable keys.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parse a full or three-letter weekday name, case-insensitively.
#[must_use]
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Today's weekday on the local clock.
#[must_use]
pub fn today() -> Weekday {
    Local::now().weekday()
}

/// Tomorrow's weekday on the local clock.
#[must_use]
pub fn tomorrow() -> Weekday {
    today().succ()
}

/// Tomorrow's date on the local clock, for exam-date filtering.
#[must_use]
pub fn tomorrow_date() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_names_round_trip() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(parse_weekday(weekday_name(day)), Some(day));
        }
    }

    #[test]
    fn parse_weekday_abbreviations() {
        assert_eq!(parse_weekday("Wed"), Some(Weekday::Wed));
        assert_eq!(parse_weekday("SATURDAY"), Some(Weekday::Sat));
        assert_eq!(parse_weekday("noday"), None);
    }

    #[test]
    fn tomorrow_follows_today() {
        assert_eq!(today().succ(), tomorrow());
    }
}
