//! Timestamp value generators.

use chrono::{DateTime, Utc};

/// Generate the current UTC timestamp.
///
/// This is NOT deterministic - each call returns the current time.
/// Records use it for both `created_at` and `updated_at`.
pub fn generate_timestamp_now() -> DateTime<Utc> {
    Utc::now()
}
