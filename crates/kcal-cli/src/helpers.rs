//! Parsing helpers for dates and display labels.

use chrono::{Local, NaiveDate};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        None => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", raw)),
    }
}

/// Human-readable day label, e.g. "Monday, Jun 3".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

/// Convert a 1-based meal number from the CLI to a 0-based ledger index.
pub fn meal_index(number: usize) -> anyhow::Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Meal numbers start at 1"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_explicit() {
        let date = parse_date(Some("2024-06-03")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date(Some("03/06/2024")).is_err());
        assert!(parse_date(Some("soon")).is_err());
    }

    #[test]
    fn test_parse_date_defaults_to_today() {
        assert_eq!(parse_date(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_meal_index_is_one_based() {
        assert_eq!(meal_index(1).unwrap(), 0);
        assert_eq!(meal_index(3).unwrap(), 2);
        assert!(meal_index(0).is_err());
    }
}
