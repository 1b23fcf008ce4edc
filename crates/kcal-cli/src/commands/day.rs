//! Day view: one day's meals, calorie total, and macro totals.

use serde_json::json;

use kcal_core::{Day, Store};

use crate::app::AppContext;
use crate::helpers::parse_date;
use crate::output::{day_table, day_totals_line};

pub fn handle(ctx: &mut AppContext, date: Option<String>, json: bool) -> anyhow::Result<()> {
    let date = parse_date(date.as_deref())?;
    let ledger = ctx.store().load_ledger()?;
    let empty = Day::default();
    let day = ledger.day(date).unwrap_or(&empty);

    if json {
        let value = json!({
            "date": date,
            "meals": day.meals,
            "total": day.total,
            "macros": day.macro_totals(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", date.format("%A, %B %-d, %Y"));
    if day.meals.is_empty() {
        println!("No meals logged.");
        return Ok(());
    }

    println!("{}", day_table(day));
    println!("{}", day_totals_line(day.total, &day.macro_totals()));
    Ok(())
}
