//! Membership registration endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::{MembershipRegistration, RegisterMembershipRequest};
use persistence::repositories::MembershipRegistrationRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_membership_registered;

/// Register a member for a plan, active from now with no end date.
///
/// POST /api/membership-registration
pub async fn register_membership(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterMembershipRequest>,
) -> Result<(StatusCode, Json<MembershipRegistration>), ApiError> {
    let repo = MembershipRegistrationRepository::new(state.store.clone());
    let registration = repo.register(request.user_id, request.plan_id).await?;

    record_membership_registered();
    info!(
        registration_id = registration.id,
        user_id = registration.user_id,
        plan_id = registration.plan_id,
        "Membership registered"
    );

    Ok((StatusCode::CREATED, Json(registration)))
}
