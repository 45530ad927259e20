//! # Error Types
//!
//! Domain-specific error types for booking-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  booking-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Malformed input (date strings)                 │
//! │                                                                         │
//! │  booking-state errors (separate crate)                                 │
//! │  └── StateError       - I/O and usage failures of the summary tool     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StateError                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::MAX_RANGE_DATES;

// =============================================================================
// Core Error
// =============================================================================

/// Core booking logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A date range was built from more boundaries than it can hold.
    ///
    /// ## When This Occurs
    /// - A date picker pushes a third date into the selection
    /// - A stored snapshot carries a `datesRange` array longer than two
    #[error("Date range holds at most {max} dates, got {count}", max = MAX_RANGE_DATES)]
    TooManyDates { count: usize },

    /// Booking payload could not be decoded.
    ///
    /// Records missing `roomDetails.name` end up here.
    #[error("Invalid booking payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any date arithmetic runs, so a malformed string never turns
/// into a nonsensical duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (wrong segment count, non-numeric part, impossible date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
