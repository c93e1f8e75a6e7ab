//! End-of-offers arithmetic.

use chrono::TimeDelta;

use mercado_core::{MarketError, Periodicity, Result};

use crate::date::parse_iso;

/// Output layout: minute precision, no offset.
const OFFERS_END_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Returns the end of the offer window, `YYYY-MM-DDTHH:mm`.
///
/// Adds 7 days for [`Periodicity::Weekly`] and 14 for
/// [`Periodicity::Biweekly`], keeping the wall-clock time. An empty or
/// unreadable start yields an empty string.
///
/// ```
/// use mercado_core::Periodicity;
/// use mercado_cycle::offers_end;
///
/// assert_eq!(offers_end("2025-10-13T08:00", Periodicity::Weekly), "2025-10-20T08:00");
/// ```
#[must_use]
pub fn offers_end(inicio_ofertas: &str, periodicidade: Periodicity) -> String {
    try_offers_end(inicio_ofertas, periodicidade).unwrap_or_default()
}

/// Strict variant of [`offers_end`].
///
/// # Errors
///
/// Returns [`MarketError::InvalidDate`] when `inicio_ofertas` is non-empty and
/// not an ISO-like date, or when the end falls outside the supported range.
pub fn try_offers_end(inicio_ofertas: &str, periodicidade: Periodicity) -> Result<String> {
    if inicio_ofertas.is_empty() {
        return Ok(String::new());
    }

    let start = parse_iso(inicio_ofertas)?;
    let end = start
        .checked_add_signed(TimeDelta::days(periodicidade.days()))
        .ok_or_else(|| MarketError::InvalidDate(inicio_ofertas.to_string()))?;
    Ok(end.format(OFFERS_END_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly() {
        assert_eq!(
            offers_end("2025-10-13T08:00", Periodicity::Weekly),
            "2025-10-20T08:00"
        );
    }

    #[test]
    fn test_biweekly_crosses_month_and_year() {
        assert_eq!(
            offers_end("2025-10-25T18:30", Periodicity::Biweekly),
            "2025-11-08T18:30"
        );
        assert_eq!(
            offers_end("2025-12-28T00:00", Periodicity::Weekly),
            "2026-01-04T00:00"
        );
        assert_eq!(
            offers_end("2024-02-22T09:00", Periodicity::Weekly),
            "2024-02-29T09:00"
        );
    }

    #[test]
    fn test_truncates_to_minutes() {
        assert_eq!(
            offers_end("2025-10-13T08:00:59", Periodicity::Weekly),
            "2025-10-20T08:00"
        );
        assert_eq!(
            offers_end("2025-10-13", Periodicity::Weekly),
            "2025-10-20T00:00"
        );
    }

    #[test]
    fn test_short_offsets_and_hour_only_starts() {
        assert_eq!(
            offers_end("2025-10-13T08:30+0300", Periodicity::Weekly),
            "2025-10-20T08:30"
        );
        assert_eq!(
            offers_end("2025-10-13T08", Periodicity::Biweekly),
            "2025-10-27T08:00"
        );
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(offers_end("", Periodicity::Biweekly), "");
        assert_eq!(offers_end("depois", Periodicity::Weekly), "");
        assert!(try_offers_end("depois", Periodicity::Weekly).is_err());
        assert_eq!(try_offers_end("", Periodicity::Weekly).unwrap(), "");
    }

    #[test]
    fn test_periodicity_from_wire_name() {
        let periodicity: Periodicity = "quinzenal".parse().unwrap();
        assert_eq!(
            offers_end("2025-10-01T10:00", periodicity),
            "2025-10-15T10:00"
        );
    }
}
