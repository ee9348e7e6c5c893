//! HTTP-date parsing.
//!
//! Only the preferred IMF-fixdate / RFC 1123 form is accepted:
//!
//! ```text
//! Sat, 01 Jan 2000 00:00:00 GMT
//! ```
//!
//! Day, year, minute and second must be zero-padded to their full width. The
//! weekday name is matched ignoring ASCII case and is not checked against the
//! calendar date. The zone must be `GMT` or `UTC`; both mean a zero offset.

use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ZONES: [&str; 2] = ["GMT", "UTC"];
const DATE_TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";

lazy_static! {
    // Day, year, minute and second are fixed width; the hour may have one digit.
    static ref DATE_TIME_SHAPE: Regex =
        Regex::new(r"^(?-u)[0-9]{2} [A-Za-z]{3} [0-9]{4} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$")
            .expect("date-time shape pattern is valid");
}

/// Errors produced while parsing an HTTP-date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpDateError {
    /// The raw header value is not valid UTF-8.
    #[error("HTTP-date is not valid UTF-8")]
    Encoding,

    /// The value does not follow the `<wkday>, <date> <time> <zone>` layout.
    #[error("HTTP-date does not match the RFC 1123 layout: {0:?}")]
    Format(String),

    /// Unknown weekday name.
    #[error("Invalid weekday in HTTP-date: {0:?}")]
    Weekday(String),

    /// Zone is not `GMT` or `UTC`.
    #[error("Unsupported zone in HTTP-date: {0:?}")]
    Zone(String),

    /// Day, month, year or time of day is out of range or malformed.
    #[error("Invalid calendar fields in HTTP-date: {0}")]
    Calendar(#[from] chrono::ParseError),
}

/// Parses an RFC 1123 HTTP-date.
///
/// ```
/// use fresh_core::parse_http_date;
///
/// let date = parse_http_date("Sat, 01 Jan 2000 00:00:00 GMT").unwrap();
/// assert_eq!(date.timestamp(), 946_684_800);
/// assert!(parse_http_date("foo").is_err());
/// ```
pub fn parse_http_date(text: &str) -> Result<DateTime<Utc>, HttpDateError> {
    let (weekday, rest) = text
        .split_once(", ")
        .ok_or_else(|| HttpDateError::Format(text.to_owned()))?;
    if !WEEKDAYS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(weekday))
    {
        return Err(HttpDateError::Weekday(weekday.to_owned()));
    }

    let (date_time, zone) = rest
        .rsplit_once(' ')
        .ok_or_else(|| HttpDateError::Format(text.to_owned()))?;
    if !ZONES.contains(&zone) {
        return Err(HttpDateError::Zone(zone.to_owned()));
    }

    if !DATE_TIME_SHAPE.is_match(date_time) {
        return Err(HttpDateError::Format(text.to_owned()));
    }

    let naive = NaiveDateTime::parse_from_str(date_time, DATE_TIME_FORMAT)?;
    Ok(naive.and_utc())
}

/// Parses a raw header value into unix seconds.
///
/// Returns `None` when the value is not a valid HTTP-date. A date that falls
/// exactly on the unix epoch is also reported as `None`: zero is reserved as the
/// "no usable date" marker, so such a validator is treated like a malformed one.
pub fn http_date_timestamp(raw: &[u8]) -> Option<i64> {
    let parsed = std::str::from_utf8(raw)
        .map_err(|_| HttpDateError::Encoding)
        .and_then(parse_http_date);

    match parsed {
        Ok(date) => Some(date.timestamp()).filter(|timestamp| *timestamp != 0),
        Err(error) => {
            tracing::trace!(%error, "unparseable HTTP-date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_gmt() {
        let date = parse_http_date("Sat, 01 Jan 2000 01:00:00 GMT").unwrap();
        assert_eq!(date.timestamp(), 946_688_400);
    }

    #[test]
    fn test_parses_utc_zone() {
        let date = parse_http_date("Tue, 15 Nov 1994 12:45:26 UTC").unwrap();
        assert_eq!(date.timestamp(), 784_903_526);
    }

    #[test]
    fn test_weekday_not_checked_against_date() {
        // 2000-01-01 was a Saturday.
        assert!(parse_http_date("Mon, 01 Jan 2000 00:00:00 GMT").is_ok());
    }

    #[test]
    fn test_weekday_is_case_insensitive() {
        let date = parse_http_date("sat, 01 Jan 2000 00:00:00 GMT").unwrap();
        assert_eq!(date.timestamp(), 946_684_800);
        assert!(parse_http_date("SAT, 01 Jan 2000 00:00:00 GMT").is_ok());
    }

    #[test]
    fn test_rejects_short_fields() {
        for text in [
            "Sat, 1 Jan 2000 00:00:00 GMT",
            "Sat, 01 Jan 2000 00:0:00 GMT",
            "Sat, 01 Jan 2000 00:00:0 GMT",
            "Sat, 01 Jan 200 00:00:00 GMT",
            "Sat, 01 Jan 02000 00:00:00 GMT",
        ] {
            assert_eq!(
                parse_http_date(text),
                Err(HttpDateError::Format(text.to_owned())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_rejects_full_month_name() {
        assert!(matches!(
            parse_http_date("Sat, 01 January 2000 00:00:00 GMT"),
            Err(HttpDateError::Format(_))
        ));
    }

    #[test]
    fn test_single_digit_hour() {
        let date = parse_http_date("Sat, 01 Jan 2000 1:00:00 GMT").unwrap();
        assert_eq!(date.timestamp(), 946_688_400);
    }

    #[test]
    fn test_rejects_unknown_weekday() {
        assert_eq!(
            parse_http_date("Xyz, 01 Jan 2000 00:00:00 GMT"),
            Err(HttpDateError::Weekday("Xyz".to_owned()))
        );
    }

    #[test]
    fn test_rejects_other_zones() {
        assert_eq!(
            parse_http_date("Sat, 01 Jan 2000 00:00:00 PST"),
            Err(HttpDateError::Zone("PST".to_owned()))
        );
        assert!(parse_http_date("Sat, 01 Jan 2000 00:00:00 +0000").is_err());
    }

    #[test]
    fn test_rejects_invalid_calendar_fields() {
        assert!(matches!(
            parse_http_date("Sat, 32 Jan 2000 00:00:00 GMT"),
            Err(HttpDateError::Calendar(_))
        ));
        assert!(matches!(
            parse_http_date("Sat, 01 Foo 2000 00:00:00 GMT"),
            Err(HttpDateError::Calendar(_))
        ));
        assert!(matches!(
            parse_http_date("Sat, 01 Jan 2000 25:00:00 GMT"),
            Err(HttpDateError::Calendar(_))
        ));
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert!(parse_http_date("foo").is_err());
        assert!(parse_http_date("").is_err());
        // asctime and RFC 850 forms are not accepted
        assert!(parse_http_date("Sat Jan  1 00:00:00 2000").is_err());
        assert!(parse_http_date("Saturday, 01-Jan-00 00:00:00 GMT").is_err());
    }

    #[test]
    fn test_timestamp_of_raw_value() {
        assert_eq!(
            http_date_timestamp(b"Sat, 01 Jan 2000 00:00:00 GMT"),
            Some(946_684_800)
        );
        assert_eq!(http_date_timestamp(b"foo"), None);
        assert_eq!(http_date_timestamp(&[0xff, 0xfe]), None);
    }

    #[test]
    fn test_epoch_is_not_a_usable_timestamp() {
        assert!(parse_http_date("Thu, 01 Jan 1970 00:00:00 GMT").is_ok());
        assert_eq!(http_date_timestamp(b"Thu, 01 Jan 1970 00:00:00 GMT"), None);
    }
}
