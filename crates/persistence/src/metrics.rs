//! Record store metrics.
//!
//! Provides functions for recording store-related metrics.

use metrics::{gauge, histogram};
use std::time::Instant;

/// Record the duration of a store operation.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record how many rows each table holds.
pub fn record_table_sizes(sizes: &[(&'static str, usize)]) {
    for (table, rows) in sizes {
        gauge!("store_table_rows", "table" => *table).set(*rows as f64);
    }
}

/// Times a store operation and records it when `record` is called.
///
/// Usage:
/// ```ignore
/// let timer = OperationTimer::new("find_trainer_by_id");
/// let trainer = self.store.read().await.trainers.get(id);
/// timer.record();
/// ```
pub struct OperationTimer {
    operation: &'static str,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(self.operation, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timer_creation() {
        let timer = OperationTimer::new("find_all_trainers");
        assert_eq!(timer.operation, "find_all_trainers");
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        OperationTimer::new("book_class").record();
        record_table_sizes(&[("trainers", 3)]);
    }
}
