//! Strict parsing of user-supplied date and time text.
//!
//! Both parsers are round-trip exact: re-formatting the parsed value with
//! the same pattern must reproduce the input verbatim. This rejects inputs
//! a lenient parser would accept or roll over, like `"31.02.2026"` or an
//! unpadded `"9:30"`.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use super::error::ScheduleError;

/// Fixed pattern for event dates: two-digit day, two-digit month,
/// four-digit year, dot-separated.
pub const DATE_PATTERN: &str = "%d.%m.%Y";

/// Fixed pattern for event times: zero-padded 24-hour clock.
pub const TIME_PATTERN: &str = "%H:%M";

/// Parses event date text against `DATE_PATTERN`.
pub fn parse_event_date(text: &str) -> Result<NaiveDate, ScheduleError> {
    let date =
        NaiveDate::parse_from_str(text, DATE_PATTERN).map_err(|_| ScheduleError::InvalidDate)?;
    if date.format(DATE_PATTERN).to_string() != text {
        return Err(ScheduleError::InvalidDate);
    }
    Ok(date)
}

/// Parses event time text against `TIME_PATTERN`.
pub fn parse_event_time(text: &str) -> Result<NaiveTime, ScheduleError> {
    let time =
        NaiveTime::parse_from_str(text, TIME_PATTERN).map_err(|_| ScheduleError::InvalidTime)?;
    if time.format(TIME_PATTERN).to_string() != text {
        return Err(ScheduleError::InvalidTime);
    }
    Ok(time)
}

/// Combines a parsed date and time into the local wall-clock value and its
/// canonical instant.
///
/// Seconds and sub-seconds are zero by construction. A wall-clock skipped
/// by a DST gap has no instant and is rejected; an ambiguous wall-clock
/// (DST fold) resolves to the earlier instant.
pub fn combine_local(
    date: NaiveDate,
    time: NaiveTime,
) -> Result<(NaiveDateTime, DateTime<Utc>), ScheduleError> {
    let wall = date.and_time(time);
    let local = match Local.from_local_datetime(&wall) {
        LocalResult::Single(local) => local,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => return Err(ScheduleError::NonexistentLocalTime),
    };
    Ok((wall, local.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_event_date_valid() {
        let date = parse_event_date("01.03.2026").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_event_date_rejects_nonexistent_day() {
        assert_eq!(
            parse_event_date("31.02.2026"),
            Err(ScheduleError::InvalidDate)
        );
        assert_eq!(
            parse_event_date("29.02.2026"),
            Err(ScheduleError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_event_date_accepts_leap_day() {
        let date = parse_event_date("29.02.2028").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_event_date_requires_exact_padding() {
        assert_eq!(
            parse_event_date("1.3.2026"),
            Err(ScheduleError::InvalidDate)
        );
        assert_eq!(
            parse_event_date("01.3.2026"),
            Err(ScheduleError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_event_date_rejects_other_separators() {
        assert_eq!(
            parse_event_date("01-03-2026"),
            Err(ScheduleError::InvalidDate)
        );
        assert_eq!(
            parse_event_date("2026.03.01"),
            Err(ScheduleError::InvalidDate)
        );
        assert_eq!(parse_event_date(""), Err(ScheduleError::InvalidDate));
    }

    #[test]
    fn test_parse_event_date_rejects_trailing_garbage() {
        assert_eq!(
            parse_event_date("01.03.2026 "),
            Err(ScheduleError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_event_time_valid() {
        let time = parse_event_time("09:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        let time = parse_event_time("23:59").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_parse_event_time_requires_exact_padding() {
        assert_eq!(parse_event_time("9:30"), Err(ScheduleError::InvalidTime));
    }

    #[test]
    fn test_parse_event_time_rejects_out_of_range() {
        assert_eq!(parse_event_time("24:00"), Err(ScheduleError::InvalidTime));
        assert_eq!(parse_event_time("12:60"), Err(ScheduleError::InvalidTime));
    }

    #[test]
    fn test_parse_event_time_rejects_seconds() {
        assert_eq!(
            parse_event_time("09:30:00"),
            Err(ScheduleError::InvalidTime)
        );
    }

    #[test]
    fn test_combine_local_zeroes_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();

        let (wall, instant) = combine_local(date, time).unwrap();

        assert_eq!(wall, date.and_time(time));
        assert_eq!(instant.second(), 0);
        assert_eq!(instant.nanosecond(), 0);
    }

    #[test]
    fn test_combine_local_roundtrips_through_local_timezone() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();

        let (wall, instant) = combine_local(date, time).unwrap();

        assert_eq!(instant.with_timezone(&Local).naive_local(), wall);
    }
}
