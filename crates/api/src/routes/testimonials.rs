//! Testimonial endpoint handlers.

use axum::{extract::State, Json};
use domain::models::Testimonial;
use persistence::repositories::TestimonialRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    let repo = TestimonialRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// GET /api/testimonials/:id
pub async fn get_testimonial(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Testimonial>, ApiError> {
    let repo = TestimonialRepository::new(state.store.clone());
    let testimonial = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Testimonial not found".to_string()))?;

    Ok(Json(testimonial))
}
