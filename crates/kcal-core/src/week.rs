//! Monday-start week math and surplus/deficit classification.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

/// Dead-zone around zero before a week counts as surplus or deficit (kcal).
///
/// Differences inside the band are noise-level and reported as neutral.
pub const DEAD_ZONE_KCAL: f64 = 50.0;

/// Classification of a week's intake against 7x the daily maintenance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    Surplus,
    Deficit,
    Neutral,
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStatus::Surplus => write!(f, "surplus"),
            WeekStatus::Deficit => write!(f, "deficit"),
            WeekStatus::Neutral => write!(f, "neutral"),
        }
    }
}

/// The Monday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(days_from_monday))
}

/// The seven dates of the Monday-start week containing `anchor`.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; 7] {
    let start = start_of_week(anchor);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// ISO week number for the week label (e.g. "Week 23").
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Sum of cached day totals across the supplied week, missing days count 0.
pub fn weekly_total(ledger: &Ledger, dates: &[NaiveDate; 7]) -> u32 {
    dates.iter().map(|date| ledger.total_for(*date)).sum()
}

/// Classify a week's intake against the maintenance estimate.
///
/// `diff = weekly_total - 7 * daily_maintenance`; surplus above the dead-zone,
/// deficit below it, neutral inside.
pub fn week_status(weekly_total: f64, daily_maintenance: f64) -> WeekStatus {
    let diff = weekly_total - daily_maintenance * 7.0;
    if diff > DEAD_ZONE_KCAL {
        WeekStatus::Surplus
    } else if diff < -DEAD_ZONE_KCAL {
        WeekStatus::Deficit
    } else {
        WeekStatus::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MealInput;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_start_of_week_is_monday() {
        // 2024-06-03 is a Monday
        assert_eq!(start_of_week(date(2024, 6, 3)), date(2024, 6, 3));
        assert_eq!(start_of_week(date(2024, 6, 5)), date(2024, 6, 3));
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(start_of_week(date(2024, 6, 9)), date(2024, 6, 3));
        assert_eq!(start_of_week(date(2024, 6, 10)), date(2024, 6, 10));
    }

    #[test]
    fn test_week_dates_are_consecutive() {
        let dates = week_dates(date(2024, 6, 5));
        assert_eq!(dates[0], date(2024, 6, 3));
        assert_eq!(dates[6], date(2024, 6, 9));
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(dates[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_weekly_total_empty_ledger_is_zero() {
        let ledger = Ledger::new();
        let dates = week_dates(date(2024, 6, 3));
        assert_eq!(weekly_total(&ledger, &dates), 0);
    }

    #[test]
    fn test_weekly_total_ignores_other_weeks() {
        let mut ledger = Ledger::new();
        ledger.add_meal(date(2024, 6, 3), &MealInput::new("Eggs", 200)).unwrap();
        ledger.add_meal(date(2024, 6, 9), &MealInput::new("Rice", 300)).unwrap();
        ledger.add_meal(date(2024, 6, 10), &MealInput::new("Soup", 400)).unwrap();

        let dates = week_dates(date(2024, 6, 5));
        assert_eq!(weekly_total(&ledger, &dates), 500);
    }

    #[test]
    fn test_week_status_dead_zone() {
        // maintenance 2000 -> weekly target 14000
        assert_eq!(week_status(14000.0, 2000.0), WeekStatus::Neutral);
        assert_eq!(week_status(14050.0, 2000.0), WeekStatus::Neutral);
        assert_eq!(week_status(13950.0, 2000.0), WeekStatus::Neutral);
        assert_eq!(week_status(14051.0, 2000.0), WeekStatus::Surplus);
        assert_eq!(week_status(13949.0, 2000.0), WeekStatus::Deficit);
    }

    #[test]
    fn test_week_status_empty_week_is_deficit() {
        // diff = 0 - 2200 * 7 = -15400
        assert_eq!(week_status(0.0, 2200.0), WeekStatus::Deficit);
    }

    #[test]
    fn test_week_number_matches_iso_week() {
        assert_eq!(week_number(date(2024, 6, 3)), 23);
        assert_eq!(week_number(date(2024, 1, 1)), 1);
    }
}
