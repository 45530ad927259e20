//! # Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKING_*`)
//! 2. Defaults (this file)
//!
//! `RUST_LOG`, when set, still wins over `log_filter` (see [`crate::init_tracing`]).

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`BookingConfig::log_filter`].
pub const ENV_LOG_FILTER: &str = "BOOKING_LOG_FILTER";

/// Environment variable overriding [`BookingConfig::warn_on_room_conflicts`].
pub const ENV_WARN_ROOM_CONFLICTS: &str = "BOOKING_WARN_ROOM_CONFLICTS";

/// Booking state configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingConfig {
    /// Default `tracing` filter directives.
    /// Default: `"info,booking=debug"`
    pub log_filter: String,

    /// Log a warning when a new booking list carries different
    /// `roomDetails` for the same room name.
    /// Default: `true`
    pub warn_on_room_conflicts: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            log_filter: "info,booking=debug".to_string(),
            warn_on_room_conflicts: true,
        }
    }
}

impl BookingConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKING_LOG_FILTER`: Override the default log filter
    /// - `BOOKING_WARN_ROOM_CONFLICTS`: `1/0`, `true/false`, `yes/no`
    ///
    /// Unparsable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BookingConfig::default();

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        if let Some(flag) = lookup(ENV_WARN_ROOM_CONFLICTS).as_deref().and_then(parse_flag) {
            config.warn_on_room_conflicts = flag;
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
