//! Half-open UTC day and week windows.
//!
//! "Completed today" and "mood entry for today" checks compare stored
//! timestamps against these intervals. Day boundaries are anchored to
//! UTC server time, never to the client's wall clock.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// A half-open interval `[start, end)` covering one calendar unit in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// The window covering the current UTC day.
    pub fn today() -> Self {
        Self::containing(Utc::now())
    }

    /// The UTC day window containing the given instant.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        Self::for_date(date)
    }

    /// The window covering a specific UTC date.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = Utc
            .from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is valid"))
            .with_timezone(&Utc);
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// The ISO-week window (Monday 00:00Z to next Monday 00:00Z)
    /// containing the given instant.
    pub fn week_containing(instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        let start = Utc.from_utc_datetime(&monday.and_hms_opt(0, 0, 0).expect("midnight is valid"));
        Self {
            start,
            end: start + Duration::weeks(1),
        }
    }

    /// Whether an instant falls inside this window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_window_is_half_open() {
        let noon = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let window = DayWindow::containing(noon);

        assert!(window.contains(window.start));
        assert!(window.contains(noon));
        assert!(!window.contains(window.end));
        assert_eq!(window.end - window.start, Duration::days(1));
    }

    #[test]
    fn test_adjacent_days_do_not_overlap() {
        let just_before_midnight = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();
        let just_after_midnight = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();

        let window = DayWindow::containing(just_before_midnight);
        assert!(window.contains(just_before_midnight));
        assert!(!window.contains(just_after_midnight));
    }

    #[test]
    fn test_week_window_starts_monday() {
        // 2024-03-15 is a Friday; its ISO week starts Monday 2024-03-11.
        let friday = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
        let window = DayWindow::week_containing(friday);

        assert_eq!(
            window.start,
            Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap()
        );
        assert_eq!(window.end - window.start, Duration::weeks(1));
        assert!(window.contains(friday));
    }
}
