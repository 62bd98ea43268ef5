//! Class schedule endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::class_schedule::ClassScheduleQuery;
use domain::models::{DayOfWeek, EnrichedClassSchedule};
use persistence::repositories::ClassScheduleRepository;
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::EntityId;

/// List schedules joined with their class and trainer.
///
/// GET /api/class-schedules?day=Tuesday
///
/// A blank `day` means no filter. A day that is not one of the seven day
/// names matches nothing and yields an empty list.
pub async fn list_class_schedules(
    State(state): State<AppState>,
    Query(query): Query<ClassScheduleQuery>,
) -> Json<Vec<EnrichedClassSchedule>> {
    let repo = ClassScheduleRepository::new(state.store.clone());

    let day = query.day.as_deref().map(str::trim).filter(|d| !d.is_empty());
    let schedules = match day {
        None => repo.find_enriched(None).await,
        Some(raw) => match raw.parse::<DayOfWeek>() {
            Ok(day) => repo.find_enriched(Some(day)).await,
            Err(err) => {
                debug!(day = %raw, error = %err, "Unknown day filter");
                Vec::new()
            }
        },
    };

    Json(schedules)
}

/// Get one schedule joined with its class and trainer.
///
/// GET /api/class-schedules/:id
pub async fn get_class_schedule(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<EnrichedClassSchedule>, ApiError> {
    let repo = ClassScheduleRepository::new(state.store.clone());
    let schedule = repo
        .find_enriched_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Class schedule not found".to_string()))?;

    Ok(Json(schedule))
}
