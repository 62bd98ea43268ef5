//! Class schedule repository.

use domain::models::{ClassSchedule, DayOfWeek, EnrichedClassSchedule, NewClassSchedule};
use domain::services::enrich_schedule;
use validator::Validate;

use crate::error::StoreError;
use crate::metrics::OperationTimer;
use crate::store::{MemoryStore, Tables};

/// Repository for class schedules.
#[derive(Clone)]
pub struct ClassScheduleRepository {
    store: MemoryStore,
}

impl ClassScheduleRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Schedules joined with class and trainer, optionally limited to one day.
    pub async fn find_enriched(&self, day: Option<DayOfWeek>) -> Vec<EnrichedClassSchedule> {
        let timer = OperationTimer::new("find_enriched_class_schedules");
        let tables = self.store.read().await;

        let schedules = match day {
            Some(day) => tables.class_schedules.filter(|s| s.day_of_week == day),
            None => tables.class_schedules.all(),
        };
        let enriched = schedules
            .into_iter()
            .map(|s| enrich(&tables, s))
            .collect();

        drop(tables);
        timer.record();
        enriched
    }

    pub async fn find_enriched_by_id(&self, id: i64) -> Option<EnrichedClassSchedule> {
        let timer = OperationTimer::new("find_enriched_class_schedule_by_id");
        let tables = self.store.read().await;
        let enriched = tables.class_schedules.get(id).map(|s| enrich(&tables, s));
        drop(tables);
        timer.record();
        enriched
    }

    /// Stores a schedule after checking capacity, seat count and time window.
    pub async fn create(&self, schedule: NewClassSchedule) -> Result<ClassSchedule, StoreError> {
        schedule.validate()?;

        let timer = OperationTimer::new("create_class_schedule");
        let schedule = self
            .store
            .write()
            .await
            .class_schedules
            .insert_with(|id| schedule.with_id(id));
        timer.record();
        Ok(schedule)
    }
}

fn enrich(tables: &Tables, schedule: ClassSchedule) -> EnrichedClassSchedule {
    enrich_schedule(
        schedule,
        |class_id| tables.gym_classes.get(class_id),
        |trainer_id| tables.trainers.get(trainer_id),
    )
}
