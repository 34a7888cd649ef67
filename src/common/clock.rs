//! Lagos wall-clock time
//!
//! The portal renders its attendance form with the server's idea of the
//! current time in Africa/Lagos. Lagos is on West Africa Time, a fixed
//! UTC+1 with no daylight saving, so the local HH:MM can be derived from
//! UTC with a constant offset.

use chrono::{DateTime, Duration, Utc};

const LAGOS_UTC_OFFSET_HOURS: i64 = 1;

/// Current Lagos time formatted as zero-padded `HH:MM`
pub fn lagos_time_hm() -> String {
    lagos_hm_at(Utc::now())
}

/// Lagos `HH:MM` for a given UTC instant
pub fn lagos_hm_at(instant: DateTime<Utc>) -> String {
    (instant + Duration::hours(LAGOS_UTC_OFFSET_HOURS))
        .format("%H:%M")
        .to_string()
}
