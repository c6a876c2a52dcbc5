//! Time helpers — business-timezone conversions
//!
//! Car instants are stored as UTC; everything date-shaped (export selection,
//! "today's revenue", report timestamps) is computed in the configured
//! business timezone so a wash finished at 23:50 local time lands on the
//! local calendar day, not the UTC one.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's calendar date in the business timezone
pub fn business_today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// The calendar date an instant falls on in the business timezone
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Render an instant as local wall-clock text (`%Y-%m-%d %H:%M:%S`)
pub fn format_local(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_date_accepts_iso_and_rejects_garbage() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2025").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn local_date_shifts_across_midnight() {
        // 2025-03-01 16:30 UTC is already 2025-03-02 00:30 in Manila (UTC+8)
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 16, 30, 0).unwrap();
        let manila: Tz = "Asia/Manila".parse().unwrap();
        assert_eq!(
            local_date(instant, manila),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
        assert_eq!(
            local_date(instant, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn format_local_renders_wall_clock() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 6, 5, 9).unwrap();
        assert_eq!(format_local(instant, chrono_tz::UTC), "2025-03-01 06:05:09");
    }
}
