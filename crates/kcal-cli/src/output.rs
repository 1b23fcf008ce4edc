//! Table and status rendering for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

use kcal_core::ledger::{Day, MacroTotals};
use kcal_core::summary::DayTotal;
use kcal_core::WeekStatus;

use crate::helpers::day_label;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn macro_cell(grams: Option<f64>) -> Cell {
    match grams {
        Some(value) => Cell::new(format!("{} g", value)),
        None => Cell::new("-"),
    }
}

/// One day's meals with per-meal macros.
pub fn day_table(day: &Day) -> Table {
    let mut table = base_table();
    table.set_header(vec!["#", "Time", "Meal", "kcal", "Protein", "Carbs", "Fat"]);
    for (position, meal) in day.meals.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&meal.time),
            Cell::new(&meal.name),
            Cell::new(meal.calories),
            macro_cell(meal.protein),
            macro_cell(meal.carbs),
            macro_cell(meal.fat),
        ]);
    }
    table
}

/// Daily totals line under the day table. Absent macros count as zero here,
/// display only.
pub fn day_totals_line(total: u32, macros: &MacroTotals) -> String {
    format!(
        "Total: {} kcal  Protein: {} g, Carbs: {} g, Fat: {} g",
        total, macros.protein, macros.carbs, macros.fat
    )
}

/// Seven-day week table, Monday first.
pub fn week_table(days: &[DayTotal]) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Day", "Meals", "kcal"]);
    for day in days {
        table.add_row(vec![
            Cell::new(day_label(day.date)),
            Cell::new(day.meals),
            Cell::new(day.total),
        ]);
    }
    table
}

/// Month table of logged days only.
pub fn month_table(days: &[DayTotal]) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Date", "Meals", "kcal"]);
    for day in days.iter().filter(|day| day.meals > 0) {
        table.add_row(vec![
            Cell::new(day.date),
            Cell::new(day.meals),
            Cell::new(day.total),
        ]);
    }
    table
}

/// Colored status line: surplus red, deficit green, neutral unstyled.
pub fn status_line(status: WeekStatus, diff: f64) -> String {
    match status {
        WeekStatus::Surplus => format!(
            "Status: {} (+{:.0} kcal, likely weight gain)",
            "surplus".red(),
            diff
        ),
        WeekStatus::Deficit => format!(
            "Status: {} ({:.0} kcal, possible weight loss)",
            "deficit".green(),
            diff
        ),
        WeekStatus::Neutral => format!("Status: neutral ({:+.0} kcal, maintenance)", diff),
    }
}

/// Hint shown by summary commands while no valid profile is stored.
pub fn profile_hint() -> String {
    "No profile set. Run `kcal profile set` to get a maintenance estimate.".to_string()
}
