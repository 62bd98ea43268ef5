//! Member endpoint handlers.

use axum::{extract::State, Json};
use domain::models::{Booking, MembershipRegistration, User};
use persistence::repositories::{
    BookingRepository, MembershipRegistrationRepository, UserRepository,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

async fn require_user(state: &AppState, id: i64) -> Result<User, ApiError> {
    UserRepository::new(state.store.clone())
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// Member profile. The password hash is never serialized.
///
/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(require_user(&state, id).await?))
}

/// GET /api/users/:id/bookings
pub async fn list_user_bookings(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let user = require_user(&state, id).await?;
    let repo = BookingRepository::new(state.store.clone());
    Ok(Json(repo.find_by_user(user.id).await))
}

/// GET /api/users/:id/membership-registrations
pub async fn list_user_membership_registrations(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Vec<MembershipRegistration>>, ApiError> {
    let user = require_user(&state, id).await?;
    let repo = MembershipRegistrationRepository::new(state.store.clone());
    Ok(Json(repo.find_by_user(user.id).await))
}
