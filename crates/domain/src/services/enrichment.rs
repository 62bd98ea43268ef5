//! Schedule enrichment.
//!
//! Joins a schedule to its class and the class's trainer for display. The
//! join is read-only and uncached; a reference that does not resolve is
//! carried as `None` rather than reported as an error.

use crate::models::{ClassSchedule, EnrichedClassSchedule, GymClass, Trainer};

/// Resolves the class and trainer of `schedule` through the given lookups.
///
/// The trainer lookup only runs when the class resolved, since the trainer
/// reference lives on the class.
pub fn enrich_schedule<C, T>(
    schedule: ClassSchedule,
    find_class: C,
    find_trainer: T,
) -> EnrichedClassSchedule
where
    C: Fn(i64) -> Option<GymClass>,
    T: Fn(i64) -> Option<Trainer>,
{
    let class = find_class(schedule.class_id);
    let trainer = class.as_ref().and_then(|c| find_trainer(c.trainer_id));

    EnrichedClassSchedule {
        schedule,
        class,
        trainer,
    }
}
