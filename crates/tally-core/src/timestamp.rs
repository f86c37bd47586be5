//! Fixed-pattern timestamp handling
//!
//! Expense timestamps are stored as text in a single fixed layout,
//! `YYYY-MM-DD HH:MM:SS`, in local wall-clock time with no offset.

use chrono::{Local, NaiveDateTime, Timelike};

/// chrono format string for stored timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a stored timestamp. Anything that does not match the fixed
/// pattern exactly yields `None`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

/// Render a timestamp in the stored layout
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time truncated to whole seconds
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
