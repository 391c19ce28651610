//! Partial-date formatting for resume date ranges.
//!
//! Resume dates are `YYYY-MM` strings straight from a month picker; they are
//! display values, not validated calendar data. Formatting never fails:
//! anything unparseable renders as an empty string.

use chrono::NaiveDate;

/// Formats a `YYYY-MM` partial date as `"Mon YYYY"` (`"2021-03"` → `"Mar 2021"`).
///
/// Empty or malformed input returns `""`. Out-of-range months roll through
/// calendar normalization instead of erroring: `"2021-13"` is January 2022,
/// `"2021-00"` is December 2020.
pub fn format_partial_date(raw: &str) -> String {
    let Some((year_part, month_part)) = raw.split_once('-') else {
        return String::new();
    };
    let (Ok(year), Ok(month)) = (year_part.parse::<i32>(), month_part.parse::<i32>()) else {
        return String::new();
    };

    // Normalize month overflow/underflow into the year, 0-based months.
    let total = year as i64 * 12 + (month as i64 - 1);
    let norm_year = total.div_euclid(12);
    let norm_month = total.rem_euclid(12) as u32 + 1;

    let Ok(norm_year) = i32::try_from(norm_year) else {
        return String::new();
    };

    match NaiveDate::from_ymd_opt(norm_year, norm_month, 1) {
        Some(date) => date.format("%b %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_valid_partial_date() {
        assert_eq!(format_partial_date("2021-03"), "Mar 2021");
        assert_eq!(format_partial_date("2023-07"), "Jul 2023");
        assert_eq!(format_partial_date("1999-12"), "Dec 1999");
        assert_eq!(format_partial_date("2024-01"), "Jan 2024");
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert_eq!(format_partial_date(""), "");
    }

    #[test]
    fn test_malformed_input_returns_empty() {
        assert_eq!(format_partial_date("2021"), "");
        assert_eq!(format_partial_date("2021-"), "");
        assert_eq!(format_partial_date("-03"), "");
        assert_eq!(format_partial_date("march 2021"), "");
        assert_eq!(format_partial_date("2021-xx"), "");
    }

    #[test]
    fn test_month_overflow_normalizes_instead_of_crashing() {
        assert_eq!(format_partial_date("2021-13"), "Jan 2022");
        assert_eq!(format_partial_date("2021-24"), "Dec 2022");
    }

    #[test]
    fn test_month_zero_normalizes_backwards() {
        assert_eq!(format_partial_date("2021-00"), "Dec 2020");
    }

    #[test]
    fn test_absurd_year_returns_empty() {
        assert_eq!(format_partial_date("999999999-01"), "");
    }
}
