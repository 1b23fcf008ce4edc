//! Week view: the Monday-start week against the maintenance target.

use kcal_core::summary::WeekSummary;
use kcal_core::Store;

use crate::app::AppContext;
use crate::helpers::parse_date;
use crate::output::{print_json, profile_hint, status_line, week_table};

pub fn handle(ctx: &mut AppContext, date: Option<String>, json: bool) -> anyhow::Result<()> {
    let anchor = parse_date(date.as_deref())?;
    let ledger = ctx.store().load_ledger()?;
    let maintenance = ctx.maintenance()?;

    let summary = WeekSummary::build(&ledger, anchor, maintenance);

    if json {
        return print_json(&summary);
    }

    println!("Week {}", summary.week);
    println!("{}", week_table(&summary.days));
    println!("Total: {} kcal", summary.total);

    match (summary.maintenance_per_week, summary.diff, summary.status) {
        (Some(weekly), Some(diff), Some(status)) => {
            println!("Maintenance: {:.0} kcal", weekly);
            println!("{}", status_line(status, diff));
        }
        _ => println!("{}", profile_hint()),
    }
    Ok(())
}
