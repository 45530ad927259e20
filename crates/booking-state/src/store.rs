//! # Booking Store
//!
//! Session state shared by every booking view: the booking list and the
//! selected date range.
//!
//! ## Thread Safety
//! The snapshot is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several views hold the same store and must see each other's writes
//! 2. Only one write may be in progress at a time
//! 3. A host may run view handlers on different threads
//!
//! Each call takes the lock for that call only, so a write is always
//! observed whole.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Store Operations                             │
//! │                                                                         │
//! │  View Action              Store Call                State Change        │
//! │  ───────────              ──────────                ────────────        │
//! │                                                                         │
//! │  Bookings fetched ──────► set_booking_list() ─────► list replaced       │
//! │                                                                         │
//! │  Dates picked ──────────► set_dates_range() ──────► range replaced      │
//! │                                                                         │
//! │  Render list ───────────► booking_list() ─────────► (read only)         │
//! │                                                                         │
//! │  Render picker ─────────► dates_range() ──────────► (read only)         │
//! │                                                                         │
//! │  NOTE: writes replace the whole value, they never merge.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use booking_core::{apartment_types, room_conflicts, BookingRecord, DateRange, RoomDetails};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::BookingConfig;

/// Everything the store holds, at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Bookings in the order the booking source returned them.
    pub booking_list: Vec<BookingRecord>,

    /// The selected check-in / check-out dates.
    pub dates_range: DateRange,
}

/// A named write, for hosts that dispatch state changes as messages.
///
/// ## Serialization
/// ```json
/// { "type": "setDatesRange", "payload": ["2024-01-01", "2024-01-10"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum StoreMutation {
    /// Replace the booking list.
    SetBookingList(Vec<BookingRecord>),
    /// Replace the date range.
    SetDatesRange(DateRange),
}

/// Shared booking session state.
///
/// Cloning the store hands out another handle to the same state, the way a
/// view would receive it by injection.
#[derive(Debug, Clone)]
pub struct BookingStore {
    state: Arc<Mutex<StoreSnapshot>>,
    warn_on_room_conflicts: bool,
}

impl BookingStore {
    /// Creates a store with an empty booking list and no dates picked.
    pub fn new() -> Self {
        Self::with_config(&BookingConfig::default())
    }

    /// Creates an empty store using the given settings.
    pub fn with_config(config: &BookingConfig) -> Self {
        BookingStore {
            state: Arc::new(Mutex::new(StoreSnapshot::default())),
            warn_on_room_conflicts: config.warn_on_room_conflicts,
        }
    }

    // A panic in a reader closure can poison the lock; writes are whole
    // replacements, so the value behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, StoreSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Returns the current booking list.
    pub fn booking_list(&self) -> Vec<BookingRecord> {
        self.lock().booking_list.clone()
    }

    /// Returns the current date range.
    pub fn dates_range(&self) -> DateRange {
        self.lock().dates_range
    }

    /// Runs `f` against the booking list without cloning it.
    ///
    /// ## Deadlocks
    /// The store stays locked while `f` runs. `f` must not call back into
    /// this store or any clone of it; read what you need, return it, and
    /// write after `with_booking_list` has returned.
    ///
    /// ## Usage
    /// ```rust
    /// # use booking_state::BookingStore;
    /// let store = BookingStore::new();
    /// let count = store.with_booking_list(|bookings| bookings.len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_booking_list<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[BookingRecord]) -> R,
    {
        let state = self.lock();
        f(&state.booking_list)
    }

    /// Runs `f` against the date range.
    ///
    /// ## Deadlocks
    /// Same rule as [`with_booking_list`](Self::with_booking_list): `f` must
    /// not call back into the store.
    pub fn with_dates_range<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DateRange) -> R,
    {
        let state = self.lock();
        f(&state.dates_range)
    }

    /// Returns a copy of both fields.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().clone()
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Replaces the booking list.
    pub fn set_booking_list(&self, payload: Vec<BookingRecord>) {
        if self.warn_on_room_conflicts {
            for name in room_conflicts(&payload) {
                warn!(room = %name, "Bookings disagree on room details, keeping the first");
            }
        }

        debug!(count = payload.len(), "Replacing booking list");
        self.lock().booking_list = payload;
    }

    /// Replaces the date range.
    pub fn set_dates_range(&self, payload: DateRange) {
        debug!(
            start = ?payload.start(),
            end = ?payload.end(),
            "Replacing dates range"
        );
        self.lock().dates_range = payload;
    }

    /// Applies a named write.
    pub fn commit(&self, mutation: StoreMutation) {
        match mutation {
            StoreMutation::SetBookingList(payload) => self.set_booking_list(payload),
            StoreMutation::SetDatesRange(payload) => self.set_dates_range(payload),
        }
    }

    /// Empties both fields.
    pub fn reset(&self) {
        debug!("Resetting booking store");
        *self.lock() = StoreSnapshot::default();
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Distinct room types of the stored bookings, in first-occurrence order.
    pub fn apartment_types(&self) -> Vec<RoomDetails> {
        self.with_booking_list(apartment_types)
    }

    /// Days covered by the stored range, once both dates are picked.
    pub fn range_duration(&self) -> Option<i64> {
        self.dates_range().duration_days()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(name: &str) -> BookingRecord {
        BookingRecord::new(RoomDetails::new(name))
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BookingStore::new();
        assert!(store.booking_list().is_empty());
        assert_eq!(store.dates_range(), DateRange::Unset);
        assert_eq!(store.range_duration(), None);
    }

    #[test]
    fn test_set_then_get_booking_list() {
        let store = BookingStore::new();
        let bookings = vec![booking("Studio").with_field("guest", "Ann"), booking("Loft")];

        store.set_booking_list(bookings.clone());
        assert_eq!(store.booking_list(), bookings);

        store.set_booking_list(Vec::new());
        assert!(store.booking_list().is_empty());
    }

    #[test]
    fn test_set_then_get_dates_range() {
        let store = BookingStore::new();

        store.set_dates_range(DateRange::Start(ymd(2024, 1, 1)));
        assert_eq!(store.dates_range(), DateRange::Start(ymd(2024, 1, 1)));
        assert_eq!(store.range_duration(), None);

        store.set_dates_range(DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 10)));
        assert_eq!(store.range_duration(), Some(9));
    }

    #[test]
    fn test_clones_share_state() {
        let store = BookingStore::new();
        let other_view = store.clone();

        other_view.set_booking_list(vec![booking("Studio")]);
        assert_eq!(store.with_booking_list(|b| b.len()), 1);
    }

    #[test]
    fn test_writes_from_other_threads_are_visible() {
        let store = BookingStore::new();
        let writer = store.clone();

        std::thread::spawn(move || {
            writer.set_dates_range(DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 4)));
        })
        .join()
        .unwrap();

        assert_eq!(store.range_duration(), Some(3));
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let store = BookingStore::new();
        store.set_booking_list(vec![booking("Studio")]);

        let reader = store.clone();
        let result = std::thread::spawn(move || {
            reader.with_booking_list(|_| panic!("view crashed while rendering"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(store.booking_list().len(), 1);
        store.set_booking_list(Vec::new());
        assert!(store.booking_list().is_empty());
    }

    #[test]
    fn test_write_after_reader_returns() {
        let store = BookingStore::new();
        store.set_booking_list(vec![booking("Studio"), booking("Loft")]);
        let picker = store.clone();

        // Read inside the closure, write once the lock is released.
        let first_room = store.with_booking_list(|bookings| bookings[0].room_name().to_string());
        picker.set_booking_list(vec![booking(&first_room)]);

        let picked = picker.with_dates_range(|range| range.is_empty());
        assert!(picked);
        picker.set_dates_range(DateRange::Start(ymd(2024, 7, 1)));

        assert_eq!(store.booking_list(), vec![booking("Studio")]);
        assert_eq!(store.dates_range(), DateRange::Start(ymd(2024, 7, 1)));
    }

    #[test]
    fn test_commit_mutations() {
        let store = BookingStore::new();

        let mutation: StoreMutation = serde_json::from_value(json!({
            "type": "setBookingList",
            "payload": [{ "roomDetails": { "name": "Studio" } }]
        }))
        .unwrap();
        store.commit(mutation);

        store.commit(StoreMutation::SetDatesRange(DateRange::Start(ymd(2024, 2, 1))));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.booking_list, vec![booking("Studio")]);
        assert_eq!(snapshot.dates_range, DateRange::Start(ymd(2024, 2, 1)));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let store = BookingStore::new();
        store.set_booking_list(vec![booking("Loft")]);
        store.set_dates_range(DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 3)));

        assert_eq!(
            serde_json::to_value(store.snapshot()).unwrap(),
            json!({
                "bookingList": [{ "roomDetails": { "name": "Loft" } }],
                "datesRange": ["2024-01-01", "2024-01-03"]
            })
        );
    }

    #[test]
    fn test_reset() {
        let store = BookingStore::new();
        store.set_booking_list(vec![booking("Loft")]);
        store.set_dates_range(DateRange::Start(ymd(2024, 1, 1)));

        store.reset();
        assert_eq!(store.snapshot(), StoreSnapshot::default());
    }

    #[test]
    fn test_conflicting_rooms_still_stored() {
        let store = BookingStore::new();
        let bookings = vec![
            BookingRecord::new(RoomDetails::new("Studio").with_attribute("beds", 1)),
            BookingRecord::new(RoomDetails::new("Studio").with_attribute("beds", 2)),
        ];

        store.set_booking_list(bookings.clone());
        assert_eq!(store.booking_list(), bookings);

        let rooms = store.apartment_types();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].extra["beds"], 1);
    }
}
