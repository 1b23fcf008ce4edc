//! Month view: per-day totals and the average over logged days.

use kcal_core::summary::MonthSummary;
use kcal_core::Store;

use crate::app::AppContext;
use crate::helpers::parse_date;
use crate::output::{month_table, print_json};

pub fn handle(ctx: &mut AppContext, date: Option<String>, json: bool) -> anyhow::Result<()> {
    let anchor = parse_date(date.as_deref())?;
    let ledger = ctx.store().load_ledger()?;

    let summary = MonthSummary::build(&ledger, anchor);

    if json {
        return print_json(&summary);
    }

    println!("{}", anchor.format("%B %Y"));
    if summary.logged_days == 0 {
        println!("No meals logged this month.");
        return Ok(());
    }

    println!("{}", month_table(&summary.days));
    println!("Total: {} kcal over {} logged days", summary.total, summary.logged_days);
    if let Some(average) = summary.daily_average {
        println!("Average: {:.0} kcal/day", average);
    }
    Ok(())
}
