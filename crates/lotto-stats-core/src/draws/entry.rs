//! Validation of a manually entered draw

use chrono::NaiveDate;

use super::Draw;
use crate::errors::{StatsError, StatsResult};
use crate::types::{MAIN_NUMBERS, NUMBER_MAX, NUMBER_MIN};

/// Parse a comma separated list of integers, e.g. `5,12,23,34,41,44,49`
pub fn parse_numbers(text: &str) -> StatsResult<Vec<i64>> {
    text.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| StatsError::InvalidNumber(part.to_string()))
        })
        .collect()
}

fn to_draw_number(value: i64, field: &'static str) -> StatsResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|n| (NUMBER_MIN..=NUMBER_MAX).contains(n))
        .ok_or_else(|| StatsError::InvalidValue {
            field,
            message: format!("{value} is not between {NUMBER_MIN} and {NUMBER_MAX}"),
        })
}

/// Validate the three text fields of a new draw.
///
/// Every field is required. The date must be `YYYY-MM-DD`, the main
/// numbers exactly seven distinct integers in 1..=50, the bonus one
/// integer in 1..=50.
pub fn parse_entry(date_text: &str, numbers_text: &str, bonus_text: &str) -> StatsResult<Draw> {
    let date_text = date_text.trim();
    if date_text.is_empty() {
        return Err(StatsError::EmptyInput { field: "date" });
    }
    let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
        .map_err(|_| StatsError::InvalidDate(date_text.to_string()))?;

    let numbers_text = numbers_text.trim();
    if numbers_text.is_empty() {
        return Err(StatsError::EmptyInput { field: "numbers" });
    }
    let values = parse_numbers(numbers_text)?;
    if values.len() != MAIN_NUMBERS {
        return Err(StatsError::InvalidValue {
            field: "numbers",
            message: format!("expected {MAIN_NUMBERS} numbers, got {}", values.len()),
        });
    }
    let mut main = [0u8; MAIN_NUMBERS];
    for (slot, &value) in main.iter_mut().zip(&values) {
        *slot = to_draw_number(value, "numbers")?;
    }

    let bonus_text = bonus_text.trim();
    if bonus_text.is_empty() {
        return Err(StatsError::EmptyInput { field: "bonus" });
    }
    let bonus_value = bonus_text
        .parse::<i64>()
        .map_err(|_| StatsError::InvalidNumber(bonus_text.to_string()))?;
    let bonus = to_draw_number(bonus_value, "bonus")?;

    Draw::new(date, main, Some(bonus)).map_err(|e| match e {
        StatsError::InvalidDraw { message, .. } => StatsError::InvalidValue {
            field: "numbers",
            message,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let draw = parse_entry("2024-03-01", "5, 12,23,34,41,44,49", "7").unwrap();
        assert_eq!(draw.main_numbers(), &[5, 12, 23, 34, 41, 44, 49]);
        assert_eq!(draw.bonus(), Some(7));
    }

    #[test]
    fn test_empty_fields() {
        assert!(matches!(
            parse_entry("", "1,2,3,4,5,6,7", "8"),
            Err(StatsError::EmptyInput { field: "date" })
        ));
        assert!(matches!(
            parse_entry("2024-03-01", " ", "8"),
            Err(StatsError::EmptyInput { field: "numbers" })
        ));
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,3,4,5,6,7", ""),
            Err(StatsError::EmptyInput { field: "bonus" })
        ));
    }

    #[test]
    fn test_bad_date() {
        assert!(matches!(
            parse_entry("2024-13-01", "1,2,3,4,5,6,7", "8"),
            Err(StatsError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_wrong_count_and_range() {
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,3", "8"),
            Err(StatsError::InvalidValue { field: "numbers", .. })
        ));
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,3,4,5,6,70", "8"),
            Err(StatsError::InvalidValue { field: "numbers", .. })
        ));
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,3,4,5,6,7", "0"),
            Err(StatsError::InvalidValue { field: "bonus", .. })
        ));
    }

    #[test]
    fn test_non_integer_input() {
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,three,4,5,6,7", "8"),
            Err(StatsError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,3,4,5,6,7", "x"),
            Err(StatsError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_repeated_numbers() {
        assert!(matches!(
            parse_entry("2024-03-01", "1,2,3,4,5,6,6", "8"),
            Err(StatsError::InvalidValue { field: "numbers", .. })
        ));
    }
}
