//! Facility endpoint handlers.

use axum::{extract::State, Json};
use domain::models::Facility;
use persistence::repositories::FacilityRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

/// GET /api/facilities
pub async fn list_facilities(State(state): State<AppState>) -> Json<Vec<Facility>> {
    let repo = FacilityRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// GET /api/facilities/:id
pub async fn get_facility(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Facility>, ApiError> {
    let repo = FacilityRepository::new(state.store.clone());
    let facility = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Facility not found".to_string()))?;

    Ok(Json(facility))
}
