//! # Domain Types
//!
//! Booking records as they arrive from the booking API, and the date range
//! selected in the UI.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐       ┌──────────────────────┐               │
//! │  │    BookingRecord     │       │     RoomDetails      │               │
//! │  │  ──────────────────  │       │  ──────────────────  │               │
//! │  │  roomDetails ────────┼──────►│  name (identity key) │               │
//! │  │  ..extra (opaque)    │       │  ..extra (opaque)    │               │
//! │  └──────────────────────┘       └──────────────────────┘               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │               DateRange                  │                          │
//! │  │  ──────────────────────────────────────  │                          │
//! │  │  Unset | Start(date) | Span(start, end)  │                          │
//! │  │  JSON: [] | ["2024-01-01"] | [.., ..]    │                          │
//! │  └──────────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pass-Through Fields
//! Only `roomDetails.name` is read by this crate. Every other field of a
//! record (guest, price, check-in, ...) lands in an `extra` map and is written
//! back unchanged when the record is serialized again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::helpers::days_between;

// =============================================================================
// Room Details
// =============================================================================

/// The room or apartment type a booking is for.
///
/// Two bookings are for the same room type when their `name`s match.
///
/// The generated TypeScript type only declares `name`; the pass-through
/// attributes are not part of the binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoomDetails {
    /// Display name, also the identity key for deduplication.
    pub name: String,

    /// Descriptive attributes (capacity, photos, ...), kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl RoomDetails {
    /// Creates room details with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        RoomDetails {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Adds a pass-through attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// Booking Record
// =============================================================================

/// One reservation entry.
///
/// The generated TypeScript type only declares `roomDetails`; the
/// pass-through fields are not part of the binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// The booked room type.
    pub room_details: RoomDetails,

    /// Everything else the booking API sent, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl BookingRecord {
    /// Creates a record for the given room with no other fields.
    pub fn new(room_details: RoomDetails) -> Self {
        BookingRecord {
            room_details,
            extra: Map::new(),
        }
    }

    /// Adds a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the room type name.
    #[inline]
    pub fn room_name(&self) -> &str {
        &self.room_details.name
    }

    /// Decodes a JSON array of bookings, as returned by the booking API.
    ///
    /// ## Example
    /// ```rust
    /// use booking_core::BookingRecord;
    ///
    /// let json = r#"[{"roomDetails": {"name": "Studio"}, "guest": "Ann"}]"#;
    /// let records = BookingRecord::from_json_list(json).unwrap();
    /// assert_eq!(records[0].room_name(), "Studio");
    /// assert_eq!(records[0].extra["guest"], "Ann");
    ///
    /// // A record without a room name is rejected up front.
    /// assert!(BookingRecord::from_json_list(r#"[{"roomDetails": {}}]"#).is_err());
    /// ```
    pub fn from_json_list(json: &str) -> CoreResult<Vec<BookingRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// Date Range
// =============================================================================

/// The date range selected in the UI, filled in one boundary at a time.
///
/// The three variants are the only shapes a selection goes through: nothing
/// picked, check-in picked, both picked. No ordering between `start` and
/// `end` is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub enum DateRange {
    /// No date picked yet.
    #[default]
    Unset,
    /// Only the first boundary picked.
    Start(NaiveDate),
    /// Both boundaries picked.
    Span(NaiveDate, NaiveDate),
}

impl DateRange {
    /// Creates a complete range.
    #[inline]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange::Span(start, end)
    }

    /// Returns the first boundary, if picked.
    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            DateRange::Unset => None,
            DateRange::Start(start) | DateRange::Span(start, _) => Some(start),
        }
    }

    /// Returns the second boundary, if picked.
    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            DateRange::Span(_, end) => Some(end),
            _ => None,
        }
    }

    /// Number of boundaries picked (0, 1 or 2).
    pub fn len(&self) -> usize {
        match self {
            DateRange::Unset => 0,
            DateRange::Start(_) => 1,
            DateRange::Span(..) => 2,
        }
    }

    /// True when nothing is picked.
    pub fn is_empty(&self) -> bool {
        matches!(self, DateRange::Unset)
    }

    /// True when both boundaries are picked.
    pub fn is_complete(&self) -> bool {
        matches!(self, DateRange::Span(..))
    }

    /// Days from start to end, negative if end comes first.
    /// `None` until both boundaries are picked.
    pub fn duration_days(&self) -> Option<i64> {
        match *self {
            DateRange::Span(start, end) => Some(days_between(start, end)),
            _ => None,
        }
    }

    /// The boundaries in pick order.
    pub fn to_vec(&self) -> Vec<NaiveDate> {
        match *self {
            DateRange::Unset => Vec::new(),
            DateRange::Start(start) => vec![start],
            DateRange::Span(start, end) => vec![start, end],
        }
    }
}

impl TryFrom<Vec<NaiveDate>> for DateRange {
    type Error = CoreError;

    fn try_from(dates: Vec<NaiveDate>) -> Result<Self, Self::Error> {
        match dates.as_slice() {
            [] => Ok(DateRange::Unset),
            [start] => Ok(DateRange::Start(*start)),
            [start, end] => Ok(DateRange::Span(*start, *end)),
            _ => Err(CoreError::TooManyDates { count: dates.len() }),
        }
    }
}

impl From<DateRange> for Vec<NaiveDate> {
    fn from(range: DateRange) -> Self {
        range.to_vec()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let payload = json!({
            "id": 17,
            "roomDetails": { "name": "Loft", "capacity": 4 },
            "guest": { "name": "Ann" },
            "startDate": "2024-01-01"
        });

        let record: BookingRecord = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(record.room_name(), "Loft");
        assert_eq!(record.room_details.extra["capacity"], 4);
        assert_eq!(record.extra["startDate"], "2024-01-01");
        assert!(!record.extra.contains_key("roomDetails"));

        assert_eq!(serde_json::to_value(&record).unwrap(), payload);
    }

    #[test]
    fn test_record_requires_room_name() {
        let missing_details = json!({ "guest": "Ann" });
        assert!(serde_json::from_value::<BookingRecord>(missing_details).is_err());

        let missing_name = json!({ "roomDetails": { "capacity": 2 } });
        assert!(serde_json::from_value::<BookingRecord>(missing_name).is_err());
    }

    #[test]
    fn test_builders() {
        let record = BookingRecord::new(RoomDetails::new("Studio").with_attribute("beds", 1))
            .with_field("price", 120);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "roomDetails": { "name": "Studio", "beds": 1 }, "price": 120 })
        );
    }

    #[test]
    fn test_ts_bindings_leave_out_pass_through_fields() {
        let room = RoomDetails::decl();
        assert!(room.contains("name: string"));
        assert!(!room.contains("extra:"));

        let record = BookingRecord::decl();
        assert!(record.contains("roomDetails: RoomDetails"));
        assert!(!record.contains("extra:"));
    }

    #[test]
    fn test_date_range_accessors() {
        let unset = DateRange::default();
        assert!(unset.is_empty());
        assert_eq!(unset.start(), None);
        assert_eq!(unset.duration_days(), None);

        let start = DateRange::Start(ymd(2024, 1, 1));
        assert_eq!(start.len(), 1);
        assert_eq!(start.start(), Some(ymd(2024, 1, 1)));
        assert_eq!(start.end(), None);
        assert!(!start.is_complete());

        let span = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 10));
        assert_eq!(span.len(), 2);
        assert_eq!(span.end(), Some(ymd(2024, 1, 10)));
        assert_eq!(span.duration_days(), Some(9));
    }

    #[test]
    fn test_date_range_json_shape() {
        let span = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 10));
        assert_eq!(
            serde_json::to_value(span).unwrap(),
            json!(["2024-01-01", "2024-01-10"])
        );
        assert_eq!(serde_json::to_value(DateRange::Unset).unwrap(), json!([]));

        let parsed: DateRange = serde_json::from_value(json!(["2024-05-02"])).unwrap();
        assert_eq!(parsed, DateRange::Start(ymd(2024, 5, 2)));
    }

    #[test]
    fn test_date_range_rejects_three_dates() {
        let dates = vec![ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)];
        assert!(matches!(
            DateRange::try_from(dates),
            Err(CoreError::TooManyDates { count: 3 })
        ));

        let json = json!(["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert!(serde_json::from_value::<DateRange>(json).is_err());
    }
}
