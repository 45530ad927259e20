//! # Booking Helpers
//!
//! Pure functions that derive display values from bookings and dates.
//!
//! ## Where They Are Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  booking list ──► apartment_types() ──► room type filter / tabs         │
//! │                                                                         │
//! │  "2024-01-01" ─┐                                                        │
//! │                ├► booking_duration() ──► "9 nights"                     │
//! │  "2024-01-10" ─┘                                                        │
//! │                                                                         │
//! │  date picker ──► format_date() ──► "2024-01-01" (API query param)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::types::{BookingRecord, RoomDetails};
use crate::validation::{validate_date_string, ValidationResult};

// =============================================================================
// Room Types
// =============================================================================

/// Returns the distinct room types in `records`, in first-occurrence order.
///
/// When several records share a room name, the `roomDetails` of the first one
/// wins and later payloads are dropped, even if they differ. Use
/// [`room_conflicts`] to find out whether they did.
///
/// ## Example
/// ```rust
/// use booking_core::{apartment_types, BookingRecord, RoomDetails};
///
/// let records = vec![
///     BookingRecord::new(RoomDetails::new("Studio")),
///     BookingRecord::new(RoomDetails::new("Studio")),
///     BookingRecord::new(RoomDetails::new("Loft")),
/// ];
///
/// let names: Vec<_> = apartment_types(&records).into_iter().map(|r| r.name).collect();
/// assert_eq!(names, ["Studio", "Loft"]);
/// ```
pub fn apartment_types(records: &[BookingRecord]) -> Vec<RoomDetails> {
    let mut seen = HashSet::with_capacity(records.len());

    records
        .iter()
        .filter(|record| seen.insert(record.room_name()))
        .map(|record| record.room_details.clone())
        .collect()
}

/// Returns the room names whose later `roomDetails` differ from the first
/// payload seen for that name, in first-occurrence order.
///
/// [`apartment_types`] silently keeps the first payload; a non-empty result
/// here means the booking source sent inconsistent room data.
pub fn room_conflicts(records: &[BookingRecord]) -> Vec<String> {
    let mut first_seen: HashMap<&str, &RoomDetails> = HashMap::new();
    let mut reported = HashSet::new();
    let mut conflicts = Vec::new();

    for record in records {
        let name = record.room_name();
        match first_seen.get(name) {
            None => {
                first_seen.insert(name, &record.room_details);
            }
            Some(first) if **first != record.room_details && reported.insert(name) => {
                conflicts.push(name.to_string());
            }
            Some(_) => {}
        }
    }

    conflicts
}

// =============================================================================
// Dates
// =============================================================================

/// Signed number of calendar days from `start` to `end`.
#[inline]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Parses a `"YYYY-MM-DD"` calendar date string.
///
/// ## Example
/// ```rust
/// use booking_core::parse_calendar_date;
///
/// assert!(parse_calendar_date("2024-03-05").is_ok());
/// assert!(parse_calendar_date("05.03.2024").is_err());
/// ```
pub fn parse_calendar_date(value: &str) -> ValidationResult<NaiveDate> {
    validate_date_string("date", value)
}

/// Number of days between two `"YYYY-MM-DD"` dates.
///
/// Both strings are read as plain calendar dates, so there is no time of day
/// and no daylight-saving shift to round away. The result is `0` for the same
/// date and negative when `end_date` comes before `start_date`.
///
/// ## Errors
/// A malformed or impossible date in either argument fails with the
/// [`ValidationError`](crate::ValidationError) for that argument.
///
/// ## Example
/// ```rust
/// use booking_core::booking_duration;
///
/// assert_eq!(booking_duration("2024-01-01", "2024-01-10").unwrap(), 9);
/// assert_eq!(booking_duration("2024-01-10", "2024-01-01").unwrap(), -9);
/// assert!(booking_duration("2024-01-01", "soon").is_err());
/// ```
pub fn booking_duration(start_date: &str, end_date: &str) -> ValidationResult<i64> {
    let start = validate_date_string("start_date", start_date)?;
    let end = validate_date_string("end_date", end_date)?;

    Ok(days_between(start, end))
}

/// Formats a date as `"YYYY-MM-DD"`.
///
/// Month and day are zero-padded to two digits. The year is written as its
/// plain decimal value, so years outside 1000..=9999 come out with a
/// different number of digits (`"999-01-02"`, `"12345-01-02"`).
///
/// ## Example
/// ```rust
/// use booking_core::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_date(date), "2024-03-05");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

// =============================================================================
// Unit Tests
// =============================================================================
