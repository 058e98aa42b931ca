use std::time::{SystemTime, UNIX_EPOCH};

pub const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// Seconds since the unix epoch. A clock set before 1970 reads as zero.
pub fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}
