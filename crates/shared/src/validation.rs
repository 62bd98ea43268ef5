//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// 24-hour wall clock time, zero padded: `07:00`, `18:45`.
    static ref CLOCK_TIME: Regex = Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$")
        .unwrap_or_else(|e| panic!("clock time pattern is invalid: {}", e));
}

/// Validates a `HH:MM` wall clock time.
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    if CLOCK_TIME.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("clock_time");
        err.message = Some("Time must use the 24-hour HH:MM format".into());
        Err(err)
    }
}

/// Converts a `HH:MM` time into minutes after midnight.
///
/// Returns `None` when the value is not a valid clock time.
pub fn clock_time_minutes(value: &str) -> Option<u32> {
    let captures = CLOCK_TIME.captures(value)?;
    let hours: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = captures.get(2)?.as_str().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Validates that a session ends after it starts (both `HH:MM`).
pub fn validate_time_window(start: &str, end: &str) -> Result<(), ValidationError> {
    match (clock_time_minutes(start), clock_time_minutes(end)) {
        (Some(start), Some(end)) if end > start => Ok(()),
        (Some(_), Some(_)) => {
            let mut err = ValidationError::new("time_window");
            err.message = Some("End time must be after start time".into());
            Err(err)
        }
        // Malformed times are reported by the per-field check.
        _ => Ok(()),
    }
}
