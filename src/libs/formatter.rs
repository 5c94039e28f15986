//! Billable-hour calculation and formatting utilities.
//!
//! This module converts raw time-log intervals into fractional hours and into
//! the human-readable duration strings used throughout the application. Every
//! place a duration is shown to the user (case tables, report summaries,
//! exported documents) goes through these functions, so all output agrees on
//! the same arithmetic and the same "Xh Ym" shape.
//!
//! ## Features
//!
//! - **Fractional Hours**: Intervals become `f64` hours for summation
//! - **Consistent Display**: All durations use the same "Xh Ym" format
//! - **Minute Rollover**: A rounded 60 minutes carries into the hour
//! - **Purity**: No I/O, no state, safe to call from anywhere
//!
//! ## Format Specification
//!
//! Display strings follow the "Xh Ym" pattern:
//! - Hours are the whole part of the value (no zero padding)
//! - Minutes are the fractional part scaled to 60 and rounded
//! - When rounding produces 60 minutes, the hour is incremented instead
//!
//! ### Examples
//! - 2.25 hours → "2h 15m"
//! - 0.5 hours → "0h 30m"
//! - 1.9933 hours → "2h 0m" (rollover, never "1h 60m")
//!
//! ## Examples
//!
//! ```rust
//! use lextrack::libs::formatter::{format_hours, hours_between};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(11, 15, 0).unwrap();
//!
//! assert_eq!(hours_between(start, end), 2.25);
//! assert_eq!(format_hours(hours_between(start, end)), "2h 15m");
//! ```

use chrono::NaiveDateTime;

/// Computes the fractional hours between two timestamps.
///
/// The difference is taken at second precision and divided by 3600, so a
/// 90-minute interval yields exactly 1.5. No ordering validation happens
/// here; stored time logs are guaranteed end-after-start at insert time,
/// and callers summing ad-hoc intervals own that invariant themselves.
///
/// # Arguments
///
/// * `start` - Interval start timestamp
/// * `end` - Interval end timestamp
///
/// # Returns
///
/// The interval length in hours as `f64`, negative if `end` precedes
/// `start`.
///
/// # Examples
///
/// ```rust
/// use lextrack::libs::formatter::hours_between;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// let start = day.and_hms_opt(13, 0, 0).unwrap();
/// let end = day.and_hms_opt(13, 45, 0).unwrap();
///
/// assert_eq!(hours_between(start, end), 0.75);
/// ```
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Formats fractional hours into an "Xh Ym" display string.
///
/// ## Formatting Rules
///
/// - **Hours**: the whole part of the value, unpadded
/// - **Minutes**: the fractional part scaled to 60 and rounded to the
///   nearest whole minute
/// - **Rollover**: when the minutes round to 60, the result carries into
///   the hours instead of printing "60m"
///
/// # Arguments
///
/// * `hours` - Duration in fractional hours
///
/// # Returns
///
/// A String in "Xh Ym" format.
///
/// # Examples
///
/// ```rust
/// use lextrack::libs::formatter::format_hours;
///
/// assert_eq!(format_hours(2.25), "2h 15m");
/// assert_eq!(format_hours(0.0), "0h 0m");
/// assert_eq!(format_hours(8.0), "8h 0m");
///
/// // 1 hour and 59.6 minutes rounds up and rolls over
/// assert_eq!(format_hours(1.9933333), "2h 0m");
/// ```
pub fn format_hours(hours: f64) -> String {
    let whole = hours.floor() as i64;
    let minutes = ((hours - whole as f64) * 60.0).round() as i64;

    // Rounding the fraction can produce a full hour
    if minutes == 60 {
        format!("{}h 0m", whole + 1)
    } else {
        format!("{}h {}m", whole, minutes)
    }
}

/// Formats the duration between two timestamps as "Xh Ym".
///
/// Convenience composition of [`hours_between`] and [`format_hours`] for
/// the common case of displaying a single time log's length.
///
/// # Examples
///
/// ```rust
/// use lextrack::libs::formatter::format_hours_between;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// let start = day.and_hms_opt(9, 0, 0).unwrap();
/// let end = day.and_hms_opt(10, 30, 0).unwrap();
///
/// assert_eq!(format_hours_between(start, end), "1h 30m");
/// ```
pub fn format_hours_between(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format_hours(hours_between(start, end))
}
