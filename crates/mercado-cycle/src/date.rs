//! ISO-like date parsing and Brazilian date display.

use std::borrow::Cow;

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

use mercado_core::{MarketError, Result};

/// Date-time layouts accepted after any offset suffix is removed.
const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Removes a trailing `Z` or `±HH`, `±HHMM`, `±HH:MM` offset, keeping the
/// wall-clock part.
fn strip_offset(value: &str) -> &str {
    if let Some(rest) = value.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        return rest;
    }
    // The sign has to sit past the date and the hour.
    match value.rfind(|c: char| c == '+' || c == '-') {
        Some(pos) if pos > 12 && is_offset(&value[pos + 1..]) => &value[..pos],
        _ => value,
    }
}

fn is_offset(tail: &str) -> bool {
    let bytes = tail.as_bytes();
    let digits = |part: &[u8]| part.iter().all(u8::is_ascii_digit);
    match bytes.len() {
        2 | 4 => digits(bytes),
        5 => bytes[2] == b':' && digits(&bytes[..2]) && digits(&bytes[3..]),
        _ => false,
    }
}

/// Completes an hour-only time (`2025-10-13T08`) to the top of the hour.
fn complete_hour(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    if bytes.len() == 13 && matches!(bytes[10], b'T' | b' ') {
        Cow::Owned(format!("{value}:00"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Parses an ISO-like date or date-time into a wall-clock timestamp.
///
/// Accepts `YYYY-MM-DD` (midnight) and `YYYY-MM-DDTHH` with optional
/// minutes, seconds and fraction. A space may replace the `T`. A trailing
/// `Z` or `±HH`, `±HHMM`, `±HH:MM` offset is accepted and dropped.
///
/// Basic-format times (`T0830`), week dates and ordinal dates are rejected.
///
/// # Errors
///
/// Returns [`MarketError::InvalidDate`] for any other shape.
pub fn parse_iso(value: &str) -> Result<NaiveDateTime> {
    let completed = complete_hour(strip_offset(value.trim()));
    let trimmed = completed.as_ref();

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| MarketError::InvalidDate(value.to_string()))
}

/// Returns the capitalised Portuguese month name, e.g. `Outubro`.
#[must_use]
pub fn month_name_pt(at: NaiveDateTime) -> String {
    let month = Utc
        .from_utc_datetime(&at)
        .format_localized("%B", Locale::pt_BR)
        .to_string();
    let mut chars = month.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A value that can be shown as a Brazilian date.
pub trait BrDate {
    /// Returns the calendar date, or `None` when there is nothing to show.
    fn to_naive_date(&self) -> Option<NaiveDate>;
}

impl BrDate for str {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.is_empty() {
            return None;
        }
        parse_iso(self).ok().map(|at| at.date())
    }
}

impl BrDate for String {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        self.as_str().to_naive_date()
    }
}

impl BrDate for NaiveDate {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl BrDate for NaiveDateTime {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> BrDate for DateTime<Tz> {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        Some(self.naive_local().date())
    }
}

impl<T: BrDate + ?Sized> BrDate for &T {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        (**self).to_naive_date()
    }
}

impl<T: BrDate> BrDate for Option<T> {
    fn to_naive_date(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(BrDate::to_naive_date)
    }
}

/// Formats a date as `dd/MM/yyyy`.
///
/// Text must be ISO-like (see [`parse_iso`]); empty or unreadable text gives
/// an empty string. Already formatted `dd/MM/yyyy` text is not accepted.
///
/// ```
/// use mercado_cycle::format_date_br;
///
/// assert_eq!(format_date_br("2025-10-13T08:00"), "13/10/2025");
/// assert_eq!(format_date_br(""), "");
/// ```
#[must_use]
pub fn format_date_br<D: BrDate + ?Sized>(date: &D) -> String {
    date.to_naive_date()
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_iso_shapes() {
        assert_eq!(parse_iso("2025-10-13").unwrap(), at(2025, 10, 13, 0, 0));
        assert_eq!(parse_iso("2025-10-13T08:30").unwrap(), at(2025, 10, 13, 8, 30));
        assert_eq!(parse_iso("2025-10-13T08:30:00").unwrap(), at(2025, 10, 13, 8, 30));
        assert_eq!(parse_iso("2025-10-13 08:30").unwrap(), at(2025, 10, 13, 8, 30));
        assert_eq!(
            parse_iso("2025-10-13T08:30:15.250").unwrap().nanosecond(),
            250_000_000
        );
    }

    #[test]
    fn test_parse_iso_drops_offset() {
        assert_eq!(parse_iso("2025-10-13T08:30Z").unwrap(), at(2025, 10, 13, 8, 30));
        assert_eq!(
            parse_iso("2025-10-13T08:30:00-03:00").unwrap(),
            at(2025, 10, 13, 8, 30)
        );
        assert_eq!(
            parse_iso("2025-10-13T08:30:00.000+00:00").unwrap(),
            at(2025, 10, 13, 8, 30)
        );
    }

    #[test]
    fn test_parse_iso_short_offsets_and_hours() {
        for text in [
            "2025-10-13T08:30+0300",
            "2025-10-13T08:30-03",
            "2025-10-13T08:30:00.5-0300",
        ] {
            let parsed = parse_iso(text).unwrap();
            assert_eq!(parsed.date(), at(2025, 10, 13, 0, 0).date(), "{text}");
            assert_eq!((parsed.hour(), parsed.minute()), (8, 30), "{text}");
        }
        assert_eq!(parse_iso("2025-10-13T08").unwrap(), at(2025, 10, 13, 8, 0));
        assert_eq!(parse_iso("2025-10-13 08").unwrap(), at(2025, 10, 13, 8, 0));
        assert_eq!(parse_iso("2025-10-13T08Z").unwrap(), at(2025, 10, 13, 8, 0));
        assert_eq!(parse_iso("2025-10-13T08+03").unwrap(), at(2025, 10, 13, 8, 0));
    }

    #[test]
    fn test_parse_iso_rejects() {
        for bad in [
            "",
            "13/10/2025",
            "2025-13-01",
            "2025-02-30",
            "amanhã",
            "2025-10-13T25:00",
            "2025-10-13T0830",
            "2025-10-13T08:30+3",
            "2025-10-13T08:30+03:0",
        ] {
            assert!(
                matches!(parse_iso(bad), Err(MarketError::InvalidDate(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_month_name_pt() {
        assert_eq!(month_name_pt(at(2025, 10, 1, 0, 0)), "Outubro");
        assert_eq!(month_name_pt(at(2025, 3, 1, 0, 0)), "Março");
        assert_eq!(month_name_pt(at(2025, 1, 1, 0, 0)), "Janeiro");
        assert_eq!(month_name_pt(at(2025, 12, 1, 0, 0)), "Dezembro");
    }

    #[test]
    fn test_format_date_br_inputs() {
        assert_eq!(format_date_br("2025-10-13"), "13/10/2025");
        assert_eq!(format_date_br(&String::from("2025-01-05T23:59")), "05/01/2025");
        assert_eq!(
            format_date_br(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            "29/02/2024"
        );
        assert_eq!(format_date_br(&at(2025, 7, 4, 12, 0)), "04/07/2025");

        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2025, 10, 13, 22, 0, 0).unwrap();
        assert_eq!(format_date_br(&local), "13/10/2025");
    }

    #[test]
    fn test_format_date_br_empty_and_precondition() {
        assert_eq!(format_date_br(""), "");
        assert_eq!(format_date_br(&None::<NaiveDate>), "");
        // Already-formatted text is outside the accepted input.
        assert_eq!(format_date_br("13/10/2025"), "");
    }
}
