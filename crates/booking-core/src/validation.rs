//! # Validation Module
//!
//! Parsing of `"YYYY-MM-DD"` calendar date strings.
//!
//! ## Accepted Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "2024-03-05"   ✅  canonical                                           │
//! │  "2024-3-5"     ✅  unpadded segments are numbers all the same          │
//! │  ""             ❌  Required                                            │
//! │  "2024/03/05"   ❌  InvalidFormat (one segment)                         │
//! │  "2024-03"      ❌  InvalidFormat (two segments)                        │
//! │  "2024-0x-05"   ❌  InvalidFormat (non-numeric)                         │
//! │  "2024-13-05"   ❌  OutOfRange (month)                                  │
//! │  "2024-02-30"   ❌  InvalidFormat (no such day)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Impossible days are rejected rather than rolled over into the next month.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a calendar date string for the named field.
///
/// `field` only feeds the error message, so callers can tell a bad
/// `start_date` from a bad `end_date`.
///
/// ## Example
/// ```rust
/// use booking_core::validation::validate_date_string;
///
/// let date = validate_date_string("start_date", "2024-01-10").unwrap();
/// assert_eq!(date.to_string(), "2024-01-10");
/// assert!(validate_date_string("start_date", "2024-02-30").is_err());
/// ```
pub fn validate_date_string(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let segments: Vec<&str> = value.split('-').collect();
    let [year, month, day] = segments.as_slice() else {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!(
                "expected YYYY-MM-DD, found {} segment(s)",
                segments.len()
            ),
        });
    };

    let year: i32 = parse_segment(field, "year", year)?;
    let month: u32 = parse_segment(field, "month", month)?;
    let day: u32 = parse_segment(field, "day", day)?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: format!("{field} month"),
            min: 1,
            max: 12,
        });
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("{value} is not a calendar date"),
    })
}

fn parse_segment<T: std::str::FromStr>(field: &str, part: &str, raw: &str) -> ValidationResult<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("{part} '{raw}' is not a number"),
        });
    }

    // All digits, so the only way to fail is overflow.
    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("{part} '{raw}' is too large"),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_dates() {
        assert_eq!(validate_date_string("d", "2024-03-05").unwrap(), ymd(2024, 3, 5));
        assert_eq!(validate_date_string("d", "2024-3-5").unwrap(), ymd(2024, 3, 5));
        assert_eq!(validate_date_string("d", " 2024-12-31 ").unwrap(), ymd(2024, 12, 31));
        assert_eq!(validate_date_string("d", "2024-02-29").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(
            validate_date_string("start_date", "   "),
            Err(ValidationError::Required {
                field: "start_date".to_string()
            })
        );
    }

    #[test]
    fn test_wrong_segment_count() {
        for input in ["2024/03/05", "2024-03", "2024-03-05-01", "-2024-03-05"] {
            assert!(
                matches!(
                    validate_date_string("d", input),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_numeric_segments() {
        assert!(matches!(
            validate_date_string("d", "2024-0x-05"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_date_string("d", "2024--05"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_date_string("d", "99999999999-01-01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_impossible_dates() {
        assert!(matches!(
            validate_date_string("d", "2024-13-01"),
            Err(ValidationError::OutOfRange { min: 1, max: 12, .. })
        ));
        assert!(matches!(
            validate_date_string("d", "2024-00-10"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_date_string("d", "2023-02-29"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_date_string("d", "2024-04-00"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
