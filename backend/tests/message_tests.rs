//! Direct messaging validation tests

use proptest::prelude::*;
use shared::validation;

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Subjects within the 1-200 character window are accepted
    #[test]
    fn test_valid_subjects_accepted(subject in "[A-Za-z][A-Za-z0-9 ,]{0,150}") {
        prop_assert!(validation::validate_subject(&subject).is_ok());
    }

    /// Bodies within the 1-2000 character window are accepted
    #[test]
    fn test_valid_bodies_accepted(body in "[A-Za-z][A-Za-z0-9 ,.!?]{0,500}") {
        prop_assert!(validation::validate_body(&body).is_ok());
    }

    /// Whitespace-only subjects are always rejected
    #[test]
    fn test_blank_subjects_rejected(subject in " {0,20}") {
        prop_assert!(validation::validate_subject(&subject).is_err());
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod message_field_tests {
    use shared::validation;

    #[test]
    fn test_subject_length_bounds() {
        assert!(validation::validate_subject("").is_err());
        assert!(validation::validate_subject("Hi").is_ok());
        assert!(validation::validate_subject(&"s".repeat(200)).is_ok());
        assert!(validation::validate_subject(&"s".repeat(201)).is_err());
    }

    #[test]
    fn test_body_length_bounds() {
        assert!(validation::validate_body("").is_err());
        assert!(validation::validate_body("   ").is_err());
        assert!(validation::validate_body("Hi, I'd like to buy 20L/week. Can we discuss?").is_ok());
        assert!(validation::validate_body(&"b".repeat(2000)).is_ok());
        assert!(validation::validate_body(&"b".repeat(2001)).is_err());
    }

    /// Sending to an unknown username must surface a not-found error, not
    /// create a dangling message.
    #[test]
    #[ignore] // Requires database connection
    fn test_unknown_receiver_rejected() {
        let receiver = "nobody-here";
        assert!(!receiver.is_empty());
    }
}
