//! Creation timestamp generator.

use chrono::Utc;

/// Current UTC time in epoch milliseconds.
///
/// This is NOT deterministic - each call returns the current time.
pub fn generate_timestamp_now() -> i64 {
    Utc::now().timestamp_millis()
}
