//! Class booking domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Status of a class booking.
///
/// Bookings are never cancelled, so every stored booking is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// A seat taken by a member on a class schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub schedule_id: i64,
    /// When the booking was accepted.
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

/// Booking data before an identifier is assigned.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i64,
    pub schedule_id: i64,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn with_id(self, id: i64) -> Booking {
        Booking {
            id,
            user_id: self.user_id,
            schedule_id: self.schedule_id,
            booking_date: self.booking_date,
            status: self.status,
        }
    }
}

/// Request payload for booking a class.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookClassRequest {
    pub user_id: i64,
    pub schedule_id: i64,
}

/// Reasons a booking request is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("User not found")]
    UserNotFound { user_id: i64 },

    #[error("Class schedule not found")]
    ScheduleNotFound { schedule_id: i64 },

    #[error("Class is full")]
    ClassFull { schedule_id: i64 },
}

impl BookingError {
    /// Short label used for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            BookingError::UserNotFound { .. } => "user_not_found",
            BookingError::ScheduleNotFound { .. } => "schedule_not_found",
            BookingError::ClassFull { .. } => "class_full",
        }
    }
}
