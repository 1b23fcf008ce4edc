//! Meal mutation commands: add, edit, delete.
//!
//! Each handler is load, mutate, save: the full ledger is read, the core
//! operation applied, and the full ledger written back. A rejected mutation
//! never reaches the save, so the stored ledger stays exactly as it was.

use kcal_core::{MealInput, Store};

use crate::app::AppContext;
use crate::helpers::{meal_index, parse_date};

fn build_input(
    name: String,
    calories: i64,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
) -> MealInput {
    let mut input = MealInput::new(name, calories);
    if let Some(grams) = protein {
        input = input.with_protein(grams);
    }
    if let Some(grams) = carbs {
        input = input.with_carbs(grams);
    }
    if let Some(grams) = fat {
        input = input.with_fat(grams);
    }
    input
}

#[allow(clippy::too_many_arguments)]
pub fn handle_add(
    ctx: &mut AppContext,
    name: String,
    calories: i64,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    date: Option<String>,
) -> anyhow::Result<()> {
    let date = parse_date(date.as_deref())?;
    let input = build_input(name, calories, protein, carbs, fat);

    let mut ledger = ctx.store().load_ledger()?;
    ledger
        .add_meal(date, &input)
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    ctx.store().save_ledger(&ledger)?;

    if !ctx.quiet() {
        let day = ledger.day(date).expect("day exists after add");
        let meal = day.meals.last().expect("meal exists after add");
        println!(
            "Added {} ({} kcal) to {}. Day total: {} kcal",
            meal.name, meal.calories, date, day.total
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_edit(
    ctx: &mut AppContext,
    number: usize,
    name: String,
    calories: i64,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    date: Option<String>,
) -> anyhow::Result<()> {
    let date = parse_date(date.as_deref())?;
    let index = meal_index(number)?;
    let input = build_input(name, calories, protein, carbs, fat);

    let mut ledger = ctx.store().load_ledger()?;
    ledger
        .edit_meal(date, index, &input)
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    ctx.store().save_ledger(&ledger)?;

    if !ctx.quiet() {
        let day = ledger.day(date).expect("day exists after edit");
        println!(
            "Updated meal {} on {}. Day total: {} kcal",
            number, date, day.total
        );
    }
    Ok(())
}

pub fn handle_delete(
    ctx: &mut AppContext,
    number: usize,
    date: Option<String>,
) -> anyhow::Result<()> {
    let date = parse_date(date.as_deref())?;
    let index = meal_index(number)?;

    let mut ledger = ctx.store().load_ledger()?;
    let removed = ledger
        .delete_meal(date, index)
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    ctx.store().save_ledger(&ledger)?;

    if !ctx.quiet() {
        let total = ledger.total_for(date);
        println!(
            "Deleted {} ({} kcal) from {}. Day total: {} kcal",
            removed.name, removed.calories, date, total
        );
    }
    Ok(())
}
