//! Class booking rules.
//!
//! Accepting a booking is two writes that belong together: one seat taken on
//! the schedule and one booking record created. [`confirm_booking`] performs
//! the seat half and hands back the record to store, so callers run both
//! inside the same critical section.

use chrono::{DateTime, Utc};

use crate::models::{BookingError, BookingStatus, ClassSchedule, NewBooking};

/// Takes a seat on `schedule` for `user_id`.
///
/// On success `schedule.booked` has grown by exactly one and the returned
/// booking is confirmed at `now`. On failure nothing changed.
pub fn confirm_booking(
    schedule: &mut ClassSchedule,
    user_id: i64,
    now: DateTime<Utc>,
) -> Result<NewBooking, BookingError> {
    schedule.reserve_seat()?;

    Ok(NewBooking {
        user_id,
        schedule_id: schedule.id,
        booking_date: now,
        status: BookingStatus::Confirmed,
    })
}
