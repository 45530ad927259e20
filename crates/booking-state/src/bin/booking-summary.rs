//! # Booking Summary
//!
//! Loads a booking list exported from the booking API into a store and prints
//! what the booking views would show: the room types and the stay length.
//!
//! ## Usage
//! ```bash
//! # Room types from a file
//! cargo run -p booking-state --bin booking-summary -- bookings.json
//!
//! # Read from stdin and add a date range
//! cat bookings.json | cargo run -p booking-state --bin booking-summary -- - 2024-01-01 2024-01-10
//! ```

use std::process::ExitCode;

use booking_core::{format_date, parse_calendar_date, BookingRecord, DateRange};
use booking_state::{BookingConfig, BookingStore, StateError, StateResult};
use tracing::{error, info};

const USAGE: &str = "usage: booking-summary <bookings.json | -> [START_DATE END_DATE]";

fn main() -> ExitCode {
    let config = BookingConfig::from_env();
    booking_state::init_tracing(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&config, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Summary failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BookingConfig, args: &[String]) -> StateResult<()> {
    let (source, range) = match args {
        [source] => (source, None),
        [source, start, end] => (source, Some((start, end))),
        _ => return Err(StateError::Usage(USAGE.to_string())),
    };

    let json = if source == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(source)?
    };

    let store = BookingStore::with_config(config);
    store.set_booking_list(BookingRecord::from_json_list(&json)?);

    if let Some((start, end)) = range {
        let start = parse_calendar_date(start)?;
        let end = parse_calendar_date(end)?;
        store.set_dates_range(DateRange::new(start, end));
    }

    let rooms = store.apartment_types();
    info!(
        bookings = store.with_booking_list(|b| b.len()),
        room_types = rooms.len(),
        "Loaded bookings"
    );

    println!("Room types:");
    for room in &rooms {
        println!("  {}", room.name);
    }

    if let (DateRange::Span(start, end), Some(days)) = (store.dates_range(), store.range_duration()) {
        println!("Stay: {} -> {} ({days} days)", format_date(start), format_date(end));
    }

    Ok(())
}
