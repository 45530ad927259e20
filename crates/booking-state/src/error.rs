//! # State Error Types
//!
//! Errors surfaced by the `booking-summary` tool. The store itself never
//! fails: every read and write is total.

use booking_core::{CoreError, ValidationError};
use thiserror::Error;

/// Failures outside the pure core (reading input, bad arguments).
#[derive(Debug, Error)]
pub enum StateError {
    /// Input file or stdin could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bookings or dates were rejected by booking-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Command line arguments don't match the expected shape.
    #[error("{0}")]
    Usage(String),
}

impl From<ValidationError> for StateError {
    fn from(err: ValidationError) -> Self {
        StateError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StateError.
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lifts_into_core() {
        let err: StateError = ValidationError::Required {
            field: "start_date".to_string(),
        }
        .into();

        assert!(matches!(err, StateError::Core(CoreError::Validation(_))));
        assert_eq!(err.to_string(), "Validation error: start_date is required");
    }
}
