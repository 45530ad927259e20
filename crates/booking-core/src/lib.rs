//! # booking-core: Pure Booking Logic
//!
//! Types and helpers behind the booking views, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Booking Helpers Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (web front-end)                        │   │
//! │  │    Booking list ──► Room type filter ──► Date picker            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            booking-state (BookingStore, config)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ booking-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌────────────┐               │   │
//! │  │   │   types   │  │   helpers   │  │ validation │               │   │
//! │  │   │  Booking  │  │  room types │  │ date parse │               │   │
//! │  │   │ DateRange │  │  durations  │  │            │               │   │
//! │  │   └───────────┘  └─────────────┘  └────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `BookingRecord`, `RoomDetails`, `DateRange`
//! - [`helpers`] - room type deduplication, durations, date formatting
//! - [`validation`] - calendar date string parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use booking_core::{apartment_types, booking_duration, BookingRecord};
//!
//! let records = BookingRecord::from_json_list(
//!     r#"[{"roomDetails": {"name": "Studio"}}, {"roomDetails": {"name": "Loft"}}]"#,
//! )
//! .unwrap();
//!
//! assert_eq!(apartment_types(&records).len(), 2);
//! assert_eq!(booking_duration("2024-01-01", "2024-01-10").unwrap(), 9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod helpers;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use helpers::{
    apartment_types, booking_duration, days_between, format_date, parse_calendar_date,
    room_conflicts,
};
pub use types::*;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of boundaries a [`DateRange`] holds (check-in, check-out).
pub const MAX_RANGE_DATES: usize = 2;
