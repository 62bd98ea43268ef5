//! Class booking repository.

use chrono::Utc;
use domain::models::{Booking, BookingError};
use domain::services::confirm_booking;

use crate::metrics::OperationTimer;
use crate::store::{MemoryStore, Tables};

/// Repository for class bookings.
#[derive(Clone)]
pub struct BookingRepository {
    store: MemoryStore,
}

impl BookingRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Bookings made by `user_id`, oldest first.
    pub async fn find_by_user(&self, user_id: i64) -> Vec<Booking> {
        let timer = OperationTimer::new("find_bookings_by_user");
        let bookings = self
            .store
            .read()
            .await
            .bookings
            .filter(|b| b.user_id == user_id);
        timer.record();
        bookings
    }

    /// Books a seat on a class schedule.
    ///
    /// The existence checks, the capacity check, the seat increment and the
    /// booking insert all run under one write guard. Concurrent calls are
    /// serialized, so `booked` never passes `capacity`.
    pub async fn book(&self, user_id: i64, schedule_id: i64) -> Result<Booking, BookingError> {
        let timer = OperationTimer::new("book_class");
        let result = {
            let mut tables = self.store.write().await;
            book_locked(&mut tables, user_id, schedule_id)
        };
        timer.record();
        result
    }
}

fn book_locked(
    tables: &mut Tables,
    user_id: i64,
    schedule_id: i64,
) -> Result<Booking, BookingError> {
    if !tables.users.contains(user_id) {
        return Err(BookingError::UserNotFound { user_id });
    }

    let now = Utc::now();
    let booking = tables
        .class_schedules
        .update(schedule_id, |schedule| confirm_booking(schedule, user_id, now))
        .ok_or(BookingError::ScheduleNotFound { schedule_id })??;

    Ok(tables.bookings.insert_with(|id| booking.with_id(id)))
}
