//! Trainer endpoint handlers.

use axum::{extract::State, Json};
use domain::models::Trainer;
use persistence::repositories::TrainerRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

/// GET /api/trainers
pub async fn list_trainers(State(state): State<AppState>) -> Json<Vec<Trainer>> {
    let repo = TrainerRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// GET /api/trainers/:id
pub async fn get_trainer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Trainer>, ApiError> {
    let repo = TrainerRepository::new(state.store.clone());
    let trainer = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Trainer not found".to_string()))?;

    Ok(Json(trainer))
}
