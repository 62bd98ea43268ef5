//! Gym class endpoint handlers.

use axum::{extract::State, Json};
use domain::models::GymClass;
use persistence::repositories::GymClassRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

/// GET /api/classes
pub async fn list_classes(State(state): State<AppState>) -> Json<Vec<GymClass>> {
    let repo = GymClassRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// GET /api/classes/:id
pub async fn get_class(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<GymClass>, ApiError> {
    let repo = GymClassRepository::new(state.store.clone());
    let class = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

    Ok(Json(class))
}
