//! Class booking endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::{BookClassRequest, Booking};
use persistence::repositories::BookingRepository;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::{record_booking_rejected, record_class_booked};

/// Book a seat on a class schedule.
///
/// POST /api/book-class
pub async fn book_class(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BookClassRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let repo = BookingRepository::new(state.store.clone());

    match repo.book(request.user_id, request.schedule_id).await {
        Ok(booking) => {
            record_class_booked();
            info!(
                booking_id = booking.id,
                user_id = booking.user_id,
                schedule_id = booking.schedule_id,
                "Class booked"
            );
            Ok((StatusCode::CREATED, Json(booking)))
        }
        Err(err) => {
            record_booking_rejected(err.reason());
            warn!(
                user_id = request.user_id,
                schedule_id = request.schedule_id,
                reason = err.reason(),
                "Booking rejected"
            );
            Err(err.into())
        }
    }
}
