//! Profile commands: set body metrics, show the stored profile.
//!
//! `set` is the CLI's profile-entry form. Missing flags are prompted for when
//! stdin is a terminal; in non-interactive use all five metrics must be given
//! as flags. Saving a profile never touches the ledger.

use std::io::IsTerminal;

use clap::{Args, Subcommand};
use dialoguer::{Input, Select};

use kcal_core::{ActivityLevel, Gender, Profile, Store};

use crate::app::AppContext;
use crate::output::print_json;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Enter or update body metrics
    Set(SetArgs),

    /// Show the stored profile and maintenance estimate
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct SetArgs {
    /// Body weight in kilograms
    #[arg(long, value_name = "KG")]
    weight: Option<f64>,

    /// Height in centimeters
    #[arg(long, value_name = "CM")]
    height: Option<f64>,

    /// Age in years
    #[arg(long, value_name = "YEARS")]
    age: Option<u32>,

    /// Gender (male or female)
    #[arg(long, value_name = "GENDER")]
    gender: Option<Gender>,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long, value_name = "LEVEL")]
    activity: Option<ActivityLevel>,

    /// Disable interactive prompts
    #[arg(long)]
    no_input: bool,
}

pub fn handle(ctx: &mut AppContext, command: ProfileCommands) -> anyhow::Result<()> {
    match command {
        ProfileCommands::Set(args) => handle_set(ctx, &args),
        ProfileCommands::Show { json } => handle_show(ctx, json),
    }
}

fn handle_set(ctx: &mut AppContext, args: &SetArgs) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let existing = ctx.load_profile()?;

    let profile = build_profile(args, existing.as_ref(), interactive)?;
    profile
        .validate()
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    let maintenance = profile
        .maintenance_kcal()
        .map_err(|err| anyhow::anyhow!("{}", err))?;

    ctx.store().save_profile(&profile)?;

    if !ctx.quiet() {
        println!("Profile saved.");
        println!("Estimated daily maintenance: {:.0} kcal", maintenance);
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, json: bool) -> anyhow::Result<()> {
    let Some(profile) = ctx.load_profile()? else {
        if json {
            println!("null");
        } else {
            println!("No profile set.");
            println!("Hint: run `kcal profile set` to enter body metrics.");
        }
        return Ok(());
    };

    if json {
        return print_json(&profile);
    }

    println!("Weight:   {} kg", profile.weight_kg);
    println!("Height:   {} cm", profile.height_cm);
    println!("Age:      {}", profile.age);
    println!("Gender:   {}", profile.gender);
    println!("Activity: {}", profile.activity);
    match profile.maintenance_kcal() {
        Ok(kcal) => println!("Maintenance: {:.0} kcal/day", kcal),
        Err(err) => println!("Maintenance: not computable ({})", err),
    }
    Ok(())
}

/// Combine flags, prompts, and the previous profile into a full set of
/// metrics. Flags win; prompts fill the gaps when interactive; otherwise a
/// missing metric is an error.
fn build_profile(
    args: &SetArgs,
    existing: Option<&Profile>,
    interactive: bool,
) -> anyhow::Result<Profile> {
    let weight_kg = match args.weight {
        Some(value) => value,
        None if interactive => prompt_number("Weight (kg)", existing.map(|p| p.weight_kg))?,
        None => return Err(missing("--weight")),
    };
    let height_cm = match args.height {
        Some(value) => value,
        None if interactive => prompt_number("Height (cm)", existing.map(|p| p.height_cm))?,
        None => return Err(missing("--height")),
    };
    let age = match args.age {
        Some(value) => value,
        None if interactive => {
            let mut input = Input::<u32>::new().with_prompt("Age (years)");
            if let Some(previous) = existing.map(|p| p.age) {
                input = input.default(previous);
            }
            input.interact_text()?
        }
        None => return Err(missing("--age")),
    };
    let gender = match args.gender {
        Some(value) => value,
        None if interactive => {
            let options = [Gender::Male, Gender::Female];
            let default = existing
                .map(|p| options.iter().position(|g| *g == p.gender).unwrap_or(0))
                .unwrap_or(0);
            let chosen = Select::new()
                .with_prompt("Gender")
                .items(&["male", "female"])
                .default(default)
                .interact()?;
            options[chosen]
        }
        None => return Err(missing("--gender")),
    };
    let activity = match args.activity {
        Some(value) => value,
        None if interactive => {
            let options = [
                ActivityLevel::Sedentary,
                ActivityLevel::Light,
                ActivityLevel::Moderate,
                ActivityLevel::Active,
                ActivityLevel::VeryActive,
            ];
            let default = existing
                .map(|p| options.iter().position(|a| *a == p.activity).unwrap_or(0))
                .unwrap_or(0);
            let chosen = Select::new()
                .with_prompt("Activity level")
                .items(&["sedentary", "light", "moderate", "active", "very_active"])
                .default(default)
                .interact()?;
            options[chosen]
        }
        None => return Err(missing("--activity")),
    };

    Ok(Profile {
        weight_kg,
        height_cm,
        age,
        gender,
        activity,
    })
}

fn prompt_number(prompt: &str, previous: Option<f64>) -> anyhow::Result<f64> {
    let mut input = Input::<f64>::new().with_prompt(prompt);
    if let Some(value) = previous {
        input = input.default(value);
    }
    Ok(input.interact_text()?)
}

fn missing(flag: &str) -> anyhow::Error {
    anyhow::anyhow!("{} is required when not running interactively", flag)
}
