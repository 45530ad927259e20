//! # booking-state
//!
//! Session state for the booking views, plus the startup plumbing around it.
//!
//! ## Module Organization
//! ```text
//! booking_state/
//! ├── lib.rs          ◄─── You are here (tracing setup & exports)
//! ├── store.rs        ◄─── BookingStore (booking list + dates range)
//! ├── config.rs       ◄─── BookingConfig (defaults + BOOKING_* env)
//! ├── error.rs        ◄─── StateError for the summary tool
//! └── bin/
//!     └── booking-summary.rs
//! ```
//!
//! ## Wiring
//! ```rust
//! use booking_state::{BookingConfig, BookingStore};
//!
//! let config = BookingConfig::from_env();
//! booking_state::init_tracing(&config);
//!
//! // One store per session, handed to every view that needs it.
//! let store = BookingStore::with_config(&config);
//! let list_view = store.clone();
//! let picker_view = store.clone();
//! # let _ = (list_view, picker_view);
//! ```

pub mod config;
pub mod error;
pub mod store;

use tracing_subscriber::EnvFilter;

pub use config::BookingConfig;
pub use error::{StateError, StateResult};
pub use store::{BookingStore, StoreMutation, StoreSnapshot};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=booking=trace` - Show trace for booking crates only
/// - Default: `config.log_filter`
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(config: &BookingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
