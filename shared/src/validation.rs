//! Validation utilities for the Camel Care Platform
//!
//! Field limits match the registration and posting forms: usernames 3-80,
//! passwords 6-128, listing titles 2-200, long-form text capped at 2000
//! characters.

use chrono::NaiveDate;

// ============================================================================
// Account Validations
// ============================================================================

/// Validate username length (3-80 characters, no surrounding whitespace)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.trim() != username {
        return Err("Username cannot start or end with whitespace");
    }
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 80 {
        return Err("Username must be at most 80 characters");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 && email.len() <= 200 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password length (6-128 characters)
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

// ============================================================================
// Content Validations
// ============================================================================

/// Validate listing or event title (2-200 characters)
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().len() < 2 {
        return Err("Title must be at least 2 characters");
    }
    if title.len() > 200 {
        return Err("Title must be at most 200 characters");
    }
    Ok(())
}

/// Validate listing or event description (10-2000 characters)
pub fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.trim().len() < 10 {
        return Err("Description must be at least 10 characters");
    }
    if description.len() > 2000 {
        return Err("Description must be at most 2000 characters");
    }
    Ok(())
}

/// Validate message subject (1-200 characters)
pub fn validate_subject(subject: &str) -> Result<(), &'static str> {
    if subject.trim().is_empty() {
        return Err("Subject cannot be empty");
    }
    if subject.len() > 200 {
        return Err("Subject must be at most 200 characters");
    }
    Ok(())
}

/// Validate message body (1-2000 characters)
pub fn validate_body(body: &str) -> Result<(), &'static str> {
    if body.trim().is_empty() {
        return Err("Message body cannot be empty");
    }
    if body.len() > 2000 {
        return Err("Message body must be at most 2000 characters");
    }
    Ok(())
}

// ============================================================================
// Date Validations
// ============================================================================

/// Parse an event date in `YYYY-MM-DD` form
pub fn parse_event_date(date: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_username_bounds() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&"a".repeat(80)).is_ok());
        assert!(validate_username(&"a".repeat(81)).is_err());
        assert!(validate_username(" farmer1").is_err());
    }

    #[test]
    fn test_password_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("farmerpass").is_ok());
        assert!(validate_password(&"x".repeat(128)).is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_email_basic_format() {
        assert!(validate_email("farmer1@example.com").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_event_date_parsing() {
        assert_eq!(
            parse_event_date("2024-11-05"),
            Ok(NaiveDate::from_ymd_opt(2024, 11, 5).unwrap())
        );
        assert!(parse_event_date("05-11-2024").is_err());
        assert!(parse_event_date("2024/11/05").is_err());
        assert!(parse_event_date("not a date").is_err());
        assert!(parse_event_date("2024-13-01").is_err());
    }

    proptest! {
        #[test]
        fn test_valid_usernames_accepted(username in "[a-z][a-z0-9_]{2,40}") {
            prop_assert!(validate_username(&username).is_ok());
        }

        #[test]
        fn test_valid_passwords_accepted(password in "[a-zA-Z0-9!@#$%]{6,60}") {
            prop_assert!(validate_password(&password).is_ok());
        }

        #[test]
        fn test_subject_length_enforced(subject in ".{0,300}") {
            let result = validate_subject(&subject);
            if subject.trim().is_empty() || subject.len() > 200 {
                prop_assert!(result.is_err());
            }
        }

        #[test]
        fn test_round_trip_dates_parse(year in 2020i32..2035, month in 1u32..=12, day in 1u32..=28) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let formatted = date.format("%Y-%m-%d").to_string();
            prop_assert_eq!(parse_event_date(&formatted), Ok(date));
        }
    }
}
