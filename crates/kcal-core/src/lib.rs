//! # Kcal Core
//!
//! Core library for kcal - a local-first weekly calorie and macronutrient tracker.
//!
//! This crate provides the domain logic and storage abstractions independent of
//! the CLI interface.
//!
//! ## Architecture
//!
//! - **profile**: Body metrics and the maintenance-calorie calculator
//! - **ledger**: Per-day meal log with cached daily totals
//! - **week**: Monday-start week math and surplus/deficit classification
//! - **summary**: Week and month view models for rendering
//! - **storage**: Store trait and JSON file implementation

pub mod error;
pub mod ledger;
pub mod profile;
pub mod storage;
pub mod summary;
pub mod week;

mod fs;

pub use error::{KcalError, Result};
pub use ledger::{Day, Ledger, Meal, MealInput};
pub use profile::{ActivityLevel, Gender, Profile};
pub use storage::{JsonFileStore, MemoryStore, ProfileLoad, Store};
pub use week::WeekStatus;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
