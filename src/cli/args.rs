//! Shared value parsers for CLI arguments

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::journal::{Outcome, SortField};

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}. Use YYYY-MM-DD", s, e))
}

/// Parse a dollar amount, accepting an optional leading `$`
pub fn parse_money(s: &str) -> Result<Decimal, String> {
    s.trim()
        .trim_start_matches('$')
        .parse::<Decimal>()
        .map_err(|_| format!("'{}' is not a valid amount", s))
}

pub fn parse_outcome(s: &str) -> Result<Outcome, String> {
    s.parse()
}

pub fn parse_sort_field(s: &str) -> Result<SortField, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert!(parse_date("31/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("50").unwrap(), dec!(50));
        assert_eq!(parse_money("$12.34").unwrap(), dec!(12.34));
        assert!(parse_money("twelve").is_err());
    }

    #[test]
    fn test_parse_outcome() {
        assert_eq!(parse_outcome("profit").unwrap(), Outcome::Profit);
        assert_eq!(parse_outcome("LOSS").unwrap(), Outcome::Loss);
        assert!(parse_outcome("draw").is_err());
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!(parse_sort_field("date").unwrap(), SortField::Date);
        assert_eq!(parse_sort_field("asset").unwrap(), SortField::Asset);
        assert_eq!(parse_sort_field("value").unwrap(), SortField::Value);
        assert!(parse_sort_field("volume").is_err());
    }
}
