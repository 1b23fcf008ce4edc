//! The meal ledger: per-day logs keyed by calendar date.
//!
//! Every mutation revalidates its input and recomputes the day's cached
//! `total`, so the invariant `total == sum of meal calories` holds after each
//! operation, not just at rest. A rejected mutation leaves the ledger
//! untouched; callers decide whether to surface the rejection.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{KcalError, Result};

/// A single logged meal.
///
/// Macro fields are absent rather than zero when not supplied, keeping
/// "unknown" distinct from "zero" in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name, non-empty after trimming
    pub name: String,

    /// Calories (kcal), strictly positive
    pub calories: u32,

    /// Clock time captured when the meal was added (HH:MM)
    pub time: String,

    /// Protein in grams, if supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,

    /// Carbohydrates in grams, if supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,

    /// Fat in grams, if supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// One calendar day's meals plus the cached calorie total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Day {
    /// Meals in insertion order (also the display and edit order)
    pub meals: Vec<Meal>,

    /// Cached sum of all meal calories, recomputed on every mutation
    pub total: u32,
}

impl Day {
    fn recompute_total(&mut self) {
        self.total = self.meals.iter().map(|meal| meal.calories).sum();
    }

    /// Aggregate macros for display, treating absent values as zero.
    ///
    /// Storage keeps absent macros absent; this is a display-level sum only.
    pub fn macro_totals(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for meal in &self.meals {
            totals.protein += meal.protein.unwrap_or(0.0);
            totals.carbs += meal.carbs.unwrap_or(0.0);
            totals.fat += meal.fat.unwrap_or(0.0);
        }
        totals
    }
}

/// Display-level macro sums for one day (grams).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Input for adding or editing a meal.
///
/// Calories are carried as `i64` so that out-of-range user input is
/// representable and rejected by validation instead of at the parsing edge.
#[derive(Debug, Clone)]
pub struct MealInput {
    /// Meal name (validated non-empty after trimming)
    pub name: String,

    /// Calories (validated strictly positive)
    pub calories: i64,

    /// Protein in grams
    pub protein: Option<f64>,

    /// Carbohydrates in grams
    pub carbs: Option<f64>,

    /// Fat in grams
    pub fat: Option<f64>,
}

impl MealInput {
    pub fn new(name: impl Into<String>, calories: i64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein: None,
            carbs: None,
            fat: None,
        }
    }

    pub fn with_protein(mut self, grams: f64) -> Self {
        self.protein = Some(grams);
        self
    }

    pub fn with_carbs(mut self, grams: f64) -> Self {
        self.carbs = Some(grams);
        self
    }

    pub fn with_fat(mut self, grams: f64) -> Self {
        self.fat = Some(grams);
        self
    }

    /// Validate and normalize, returning the trimmed name and calories.
    fn validate(&self) -> Result<(String, u32)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(KcalError::Validation(
                "Meal name must not be empty".to_string(),
            ));
        }
        if self.calories <= 0 {
            return Err(KcalError::Validation(format!(
                "Calories must be a positive integer, got {}",
                self.calories
            )));
        }
        let calories = u32::try_from(self.calories)
            .map_err(|_| KcalError::Validation(format!("Calories out of range: {}", self.calories)))?;
        for (label, value) in [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if let Some(grams) = value {
                if !grams.is_finite() || grams < 0.0 {
                    return Err(KcalError::Validation(format!(
                        "{} must be a non-negative number, got {}",
                        label, grams
                    )));
                }
            }
        }
        Ok((name.to_string(), calories))
    }
}

/// The full collection of per-day meal logs, keyed by calendar date.
///
/// `BTreeMap` keeps the keys in chronological order for display; the storage
/// contract itself imposes no ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, Day>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up one day's record.
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.get(&date)
    }

    /// Cached calorie total for a day, zero when nothing is logged.
    pub fn total_for(&self, date: NaiveDate) -> u32 {
        self.days.get(&date).map(|day| day.total).unwrap_or(0)
    }

    /// Iterate all day records in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Day)> {
        self.days.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Append a meal to a day, capturing the current clock time.
    ///
    /// Absent macro fields stay absent in storage. The day's `total` is
    /// recomputed from the full meal list.
    ///
    /// # Errors
    ///
    /// Returns `KcalError::Validation` (and mutates nothing) if calories are
    /// not a positive integer, the trimmed name is empty, or a supplied macro
    /// is negative or non-finite.
    pub fn add_meal(&mut self, date: NaiveDate, input: &MealInput) -> Result<()> {
        let time = Local::now().format("%H:%M").to_string();
        self.add_meal_at(date, input, time)
    }

    /// Append with an explicit capture time. Exposed for deterministic tests.
    pub fn add_meal_at(&mut self, date: NaiveDate, input: &MealInput, time: String) -> Result<()> {
        let (name, calories) = input.validate()?;
        let day = self.days.entry(date).or_default();
        day.meals.push(Meal {
            name,
            calories,
            time,
            protein: input.protein,
            carbs: input.carbs,
            fat: input.fat,
        });
        day.recompute_total();
        Ok(())
    }

    /// Replace the meal at `index` wholesale.
    ///
    /// Absent macro fields zero-fill on edit, unlike add which keeps them
    /// absent; the recorded `time` is kept.
    ///
    /// # Errors
    ///
    /// `KcalError::NotFound` if the day or index does not exist,
    /// `KcalError::Validation` for invalid input; either way nothing changes.
    pub fn edit_meal(&mut self, date: NaiveDate, index: usize, input: &MealInput) -> Result<()> {
        let (name, calories) = input.validate()?;
        let day = self
            .days
            .get_mut(&date)
            .ok_or_else(|| KcalError::NotFound(format!("No meals logged on {}", date)))?;
        let meal = day.meals.get_mut(index).ok_or_else(|| {
            KcalError::NotFound(format!("No meal at index {} on {}", index, date))
        })?;
        *meal = Meal {
            name,
            calories,
            time: meal.time.clone(),
            protein: Some(input.protein.unwrap_or(0.0)),
            carbs: Some(input.carbs.unwrap_or(0.0)),
            fat: Some(input.fat.unwrap_or(0.0)),
        };
        day.recompute_total();
        Ok(())
    }

    /// Remove the meal at `index`, returning it.
    ///
    /// Removing the last meal leaves an empty day record, not a missing key.
    ///
    /// # Errors
    ///
    /// `KcalError::NotFound` if the day or index does not exist; nothing
    /// changes in that case.
    pub fn delete_meal(&mut self, date: NaiveDate, index: usize) -> Result<Meal> {
        let day = self
            .days
            .get_mut(&date)
            .ok_or_else(|| KcalError::NotFound(format!("No meals logged on {}", date)))?;
        if index >= day.meals.len() {
            return Err(KcalError::NotFound(format!(
                "No meal at index {} on {}",
                index, date
            )));
        }
        let removed = day.meals.remove(index);
        day.recompute_total();
        Ok(removed)
    }
}
