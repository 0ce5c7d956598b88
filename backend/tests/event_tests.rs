//! Event creation and date handling tests

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::validation;

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Any real date formatted as YYYY-MM-DD parses back to itself
    #[test]
    fn test_formatted_dates_parse(year in 2000i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let formatted = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(validation::parse_event_date(&formatted), Ok(date));
    }

    /// Arbitrary non-date noise is rejected
    #[test]
    fn test_noise_rejected(noise in "[a-zA-Z !?]{1,30}") {
        prop_assert!(validation::parse_event_date(&noise).is_err());
    }
}

// ============================================================================
// Unit Tests: Date Format
// ============================================================================

#[cfg(test)]
mod date_format_tests {
    use shared::validation::parse_event_date;

    #[test]
    fn test_iso_date_accepted() {
        assert!(parse_event_date("2025-01-15").is_ok());
        assert!(parse_event_date("2024-02-29").is_ok()); // leap day
    }

    #[test]
    fn test_other_formats_rejected() {
        assert!(parse_event_date("15-01-2025").is_err());
        assert!(parse_event_date("2025/01/15").is_err());
        assert!(parse_event_date("Jan 15, 2025").is_err());
        assert!(parse_event_date("2025-1-15 10:00").is_err());
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert!(parse_event_date("2025-13-01").is_err());
        assert!(parse_event_date("2025-02-30").is_err());
        assert!(parse_event_date("2023-02-29").is_err()); // not a leap year
    }

    #[test]
    fn test_error_names_expected_format() {
        let err = parse_event_date("not a date").unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }
}

// ============================================================================
// Unit Tests: Event Fields
// ============================================================================

#[cfg(test)]
mod event_field_tests {
    use shared::validation;

    #[test]
    fn test_event_title_uses_shared_bounds() {
        assert!(validation::validate_title("Camel Conservation Workshop").is_ok());
        assert!(validation::validate_title("W").is_err());
    }

    #[test]
    fn test_event_description_uses_shared_bounds() {
        assert!(
            validation::validate_description("Field workshop on camel nutrition and conservation.")
                .is_ok()
        );
        assert!(validation::validate_description("short").is_err());
    }
}
