//! Streak computation over completion timestamps.
//!
//! Completions are collapsed to calendar units (UTC days for daily
//! habits, ISO weeks for weekly ones) before scanning for gaps, so
//! completing a habit twice in one day never inflates a streak.

use chrono::{DateTime, Datelike, Duration, Utc};

use habitflow_entity::habit::HabitFrequency;

/// Current and best streak lengths for one habit, in frequency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StreakSummary {
    /// Consecutive units ending at (or immediately before) now.
    pub current: u32,
    /// Longest consecutive run on record.
    pub best: u32,
}

/// Computes current and best streaks from completion timestamps.
///
/// `times` need not be sorted or deduplicated. The current streak
/// counts backward from the unit containing `now`; a streak whose last
/// completion is in the immediately preceding unit still counts, so a
/// streak is not broken before today's chance to complete has passed.
pub fn compute_streaks(
    times: &[DateTime<Utc>],
    frequency: HabitFrequency,
    now: DateTime<Utc>,
) -> StreakSummary {
    let mut units: Vec<i64> = times.iter().map(|t| unit_index(*t, frequency)).collect();
    units.sort_unstable();
    units.dedup();

    if units.is_empty() {
        return StreakSummary { current: 0, best: 0 };
    }

    let mut best: u32 = 1;
    let mut run: u32 = 1;
    for pair in units.windows(2) {
        if pair[1] - pair[0] == 1 {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }

    let now_unit = unit_index(now, frequency);
    let last = *units.last().unwrap_or(&i64::MIN);
    let current = if now_unit - last <= 1 {
        // `run` still holds the length of the trailing run.
        run
    } else {
        0
    };

    StreakSummary { current, best }
}

/// Maps an instant to a monotonically increasing calendar unit index.
fn unit_index(instant: DateTime<Utc>, frequency: HabitFrequency) -> i64 {
    let date = instant.date_naive();
    match frequency {
        HabitFrequency::Daily => i64::from(date.num_days_from_ce()),
        HabitFrequency::Weekly => {
            let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
            i64::from(monday.num_days_from_ce()) / 7
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_no_completions_means_no_streak() {
        let summary = compute_streaks(&[], HabitFrequency::Daily, at(2024, 3, 15, 12));
        assert_eq!(summary, StreakSummary { current: 0, best: 0 });
    }

    #[test]
    fn test_consecutive_days() {
        let times = [at(2024, 3, 12, 9), at(2024, 3, 13, 22), at(2024, 3, 14, 7)];
        let summary = compute_streaks(&times, HabitFrequency::Daily, at(2024, 3, 14, 12));
        assert_eq!(summary, StreakSummary { current: 3, best: 3 });
    }

    #[test]
    fn test_yesterday_keeps_streak_alive() {
        // Last completion was yesterday; today's chance has not passed.
        let times = [at(2024, 3, 12, 9), at(2024, 3, 13, 9)];
        let summary = compute_streaks(&times, HabitFrequency::Daily, at(2024, 3, 14, 8));
        assert_eq!(summary.current, 2);
    }

    #[test]
    fn test_gap_breaks_current_but_not_best() {
        let times = [
            at(2024, 3, 1, 9),
            at(2024, 3, 2, 9),
            at(2024, 3, 3, 9),
            at(2024, 3, 4, 9),
            // gap
            at(2024, 3, 10, 9),
        ];
        let summary = compute_streaks(&times, HabitFrequency::Daily, at(2024, 3, 10, 12));
        assert_eq!(summary, StreakSummary { current: 1, best: 4 });
    }

    #[test]
    fn test_stale_history_has_zero_current() {
        let times = [at(2024, 2, 1, 9), at(2024, 2, 2, 9)];
        let summary = compute_streaks(&times, HabitFrequency::Daily, at(2024, 3, 15, 12));
        assert_eq!(summary, StreakSummary { current: 0, best: 2 });
    }

    #[test]
    fn test_multiple_completions_per_day_collapse() {
        let times = [
            at(2024, 3, 13, 8),
            at(2024, 3, 13, 20),
            at(2024, 3, 14, 9),
        ];
        let summary = compute_streaks(&times, HabitFrequency::Daily, at(2024, 3, 14, 12));
        assert_eq!(summary, StreakSummary { current: 2, best: 2 });
    }

    #[test]
    fn test_weekly_units_span_iso_weeks() {
        // Mar 11-17 and Mar 18-24 of 2024 are consecutive ISO weeks.
        let times = [at(2024, 3, 12, 9), at(2024, 3, 19, 9)];
        let summary = compute_streaks(&times, HabitFrequency::Weekly, at(2024, 3, 20, 12));
        assert_eq!(summary, StreakSummary { current: 2, best: 2 });
    }

    #[test]
    fn test_weekly_same_week_is_one_unit() {
        let times = [at(2024, 3, 11, 9), at(2024, 3, 15, 9)];
        let summary = compute_streaks(&times, HabitFrequency::Weekly, at(2024, 3, 16, 12));
        assert_eq!(summary, StreakSummary { current: 1, best: 1 });
    }

    #[test]
    fn test_unsorted_input() {
        let times = [at(2024, 3, 14, 7), at(2024, 3, 12, 9), at(2024, 3, 13, 22)];
        let summary = compute_streaks(&times, HabitFrequency::Daily, at(2024, 3, 14, 12));
        assert_eq!(summary, StreakSummary { current: 3, best: 3 });
    }
}
