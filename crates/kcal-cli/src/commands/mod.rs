//! Command handlers.

pub mod day;
pub mod meal;
pub mod month;
pub mod profile;
pub mod week;
