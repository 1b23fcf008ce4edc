//! kcal CLI - a local-first weekly calorie and macronutrient tracker
//!
//! This is the command-line interface for kcal. It provides a user-friendly
//! surface over the core library: profile management, per-day meal logging,
//! and week/month summaries.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use kcal_core::VERSION;

mod app;
mod commands;
mod config;
mod helpers;
mod output;

use app::AppContext;

/// kcal - a local-first weekly calorie and macronutrient tracker
#[derive(Parser)]
#[command(name = "kcal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Data directory holding the ledger and profile
    #[arg(long, global = true, env = "KCAL_DATA_DIR", value_name = "DIR")]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage body metrics used for the maintenance estimate
    Profile {
        #[command(subcommand)]
        command: commands::profile::ProfileCommands,
    },

    /// Log a meal for a day
    Add {
        /// Meal name
        #[arg(value_name = "NAME")]
        name: String,

        /// Calories (kcal)
        #[arg(value_name = "CALORIES", allow_negative_numbers = true)]
        calories: i64,

        /// Protein in grams
        #[arg(long, value_name = "G")]
        protein: Option<f64>,

        /// Carbohydrates in grams
        #[arg(long, value_name = "G")]
        carbs: Option<f64>,

        /// Fat in grams
        #[arg(long, value_name = "G")]
        fat: Option<f64>,

        /// Day to log against (YYYY-MM-DD, default today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Replace a logged meal (index as shown by `kcal day`)
    Edit {
        /// Meal number within the day, starting at 1
        #[arg(value_name = "INDEX")]
        index: usize,

        /// New meal name
        #[arg(long, value_name = "NAME")]
        name: String,

        /// New calories (kcal)
        #[arg(long, value_name = "CALORIES", allow_negative_numbers = true)]
        calories: i64,

        /// Protein in grams (0 when omitted)
        #[arg(long, value_name = "G")]
        protein: Option<f64>,

        /// Carbohydrates in grams (0 when omitted)
        #[arg(long, value_name = "G")]
        carbs: Option<f64>,

        /// Fat in grams (0 when omitted)
        #[arg(long, value_name = "G")]
        fat: Option<f64>,

        /// Day the meal belongs to (YYYY-MM-DD, default today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Delete a logged meal (index as shown by `kcal day`)
    Delete {
        /// Meal number within the day, starting at 1
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Day the meal belongs to (YYYY-MM-DD, default today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Show one day's meals and totals
    Day {
        /// Day to show (YYYY-MM-DD, default today)
        #[arg(value_name = "DATE")]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the Monday-start week summary
    Week {
        /// Any day inside the week to show (YYYY-MM-DD, default today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the calendar-month summary
    Month {
        /// Any day inside the month to show (YYYY-MM-DD, default today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_quickstart();
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "kcal", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = AppContext::open(cli.data_dir.as_deref(), cli.quiet)?;

    match command {
        Commands::Profile { command } => commands::profile::handle(&mut ctx, command),
        Commands::Add {
            name,
            calories,
            protein,
            carbs,
            fat,
            date,
        } => commands::meal::handle_add(&mut ctx, name, calories, protein, carbs, fat, date),
        Commands::Edit {
            index,
            name,
            calories,
            protein,
            carbs,
            fat,
            date,
        } => commands::meal::handle_edit(&mut ctx, index, name, calories, protein, carbs, fat, date),
        Commands::Delete { index, date } => commands::meal::handle_delete(&mut ctx, index, date),
        Commands::Day { date, json } => commands::day::handle(&mut ctx, date, json),
        Commands::Week { date, json } => commands::week::handle(&mut ctx, date, json),
        Commands::Month { date, json } => commands::month::handle(&mut ctx, date, json),
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}

fn print_quickstart() {
    println!("kcal - weekly calorie tracker");
    println!();
    println!("Quickstart:");
    println!("  kcal profile set        Enter body metrics (interactive)");
    println!("  kcal add \"Eggs\" 200     Log a meal for today");
    println!("  kcal day                Show today's meals and totals");
    println!("  kcal week               Show this week against maintenance");
    println!();
    println!("Run `kcal --help` for the full command list.");
}
