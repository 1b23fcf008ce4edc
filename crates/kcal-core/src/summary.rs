//! Serializable week and month view models.
//!
//! These are derived snapshots for rendering, built from the ledger and an
//! optional maintenance estimate. Without a valid profile the maintenance
//! fields stay `None` and no status is derived.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::ledger::Ledger;
use crate::week::{week_dates, week_number, week_status, weekly_total, WeekStatus};

/// One day's cached total, paired with its date.
#[derive(Debug, Clone, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total: u32,
    /// Number of meals logged that day
    pub meals: usize,
}

/// Snapshot of one Monday-start week.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    /// ISO week number of the anchor date
    pub week: u32,

    /// The seven days, Monday first
    pub days: Vec<DayTotal>,

    /// Weekly calorie total (missing days count 0)
    pub total: u32,

    /// Daily maintenance estimate, absent without a valid profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_per_day: Option<f64>,

    /// Weekly maintenance target (7x daily)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_per_week: Option<f64>,

    /// total - maintenance_per_week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<f64>,

    /// Surplus/deficit/neutral classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WeekStatus>,
}

impl WeekSummary {
    /// Build the snapshot for the week containing `anchor`.
    ///
    /// `maintenance` is the daily estimate from a valid profile, or `None`
    /// when the tracker is in profile-entry mode.
    pub fn build(ledger: &Ledger, anchor: NaiveDate, maintenance: Option<f64>) -> Self {
        let dates = week_dates(anchor);
        let total = weekly_total(ledger, &dates);
        let days = dates
            .iter()
            .map(|date| DayTotal {
                date: *date,
                total: ledger.total_for(*date),
                meals: ledger.day(*date).map(|day| day.meals.len()).unwrap_or(0),
            })
            .collect();

        let maintenance_per_week = maintenance.map(|daily| daily * 7.0);
        let diff = maintenance_per_week.map(|weekly| f64::from(total) - weekly);
        let status = maintenance.map(|daily| week_status(f64::from(total), daily));

        Self {
            week: week_number(anchor),
            days,
            total,
            maintenance_per_day: maintenance,
            maintenance_per_week,
            diff,
            status,
        }
    }
}

/// Snapshot of one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,

    /// Every day of the month in order
    pub days: Vec<DayTotal>,

    /// Month calorie total
    pub total: u32,

    /// Days with at least one meal logged
    pub logged_days: usize,

    /// Average intake over logged days, absent when nothing was logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_average: Option<f64>,
}

impl MonthSummary {
    /// Build the snapshot for the month containing `anchor`.
    pub fn build(ledger: &Ledger, anchor: NaiveDate) -> Self {
        let days: Vec<DayTotal> = month_dates(anchor)
            .into_iter()
            .map(|date| DayTotal {
                date,
                total: ledger.total_for(date),
                meals: ledger.day(date).map(|day| day.meals.len()).unwrap_or(0),
            })
            .collect();

        let total: u32 = days.iter().map(|day| day.total).sum();
        let logged_days = days.iter().filter(|day| day.meals > 0).count();
        let daily_average = if logged_days > 0 {
            Some(f64::from(total) / logged_days as f64)
        } else {
            None
        };

        Self {
            year: anchor.year(),
            month: anchor.month(),
            days,
            total,
            logged_days,
            daily_average,
        }
    }
}

/// All dates of the calendar month containing `anchor`.
pub fn month_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = anchor.with_day(1).expect("day 1 exists in every month");
    let mut dates = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == first.month() {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}
