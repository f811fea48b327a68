//! Shared helper utilities for factory methods.

use chrono::{DateTime, TimeZone, Utc};

/// Counter for generating unique ids in tests.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(1);

/// Gets the next unique id for test records.
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fixed timestamp used for `createdAt`/`updatedAt` so records compare equal across
/// serialization.
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}
