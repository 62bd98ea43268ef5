//! Membership plan endpoint handlers.

use axum::{extract::State, Json};
use domain::models::MembershipPlan;
use persistence::repositories::MembershipPlanRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

/// List membership plans.
///
/// GET /api/membership-plans
pub async fn list_membership_plans(State(state): State<AppState>) -> Json<Vec<MembershipPlan>> {
    let repo = MembershipPlanRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// Get one membership plan.
///
/// GET /api/membership-plans/:id
pub async fn get_membership_plan(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<MembershipPlan>, ApiError> {
    let repo = MembershipPlanRepository::new(state.store.clone());
    let plan = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Membership plan not found".to_string()))?;

    Ok(Json(plan))
}
