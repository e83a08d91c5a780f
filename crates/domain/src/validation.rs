//! Batch validation gate
//!
//! The engine never partially scores a batch: every task is checked before
//! any sub-score is computed, and the first violation rejects the whole
//! request.

use std::collections::HashSet;

use tracing::debug;

use crate::entities::Task;
use crate::errors::{AnalyzerError, AnalyzerResult};

pub const MIN_ESTIMATED_HOURS: f64 = 0.1;
/// 超过该工时的预估被视为不现实的输入
pub const MAX_ESTIMATED_HOURS: f64 = 1000.0;
pub const MIN_IMPORTANCE: i32 = 1;
pub const MAX_IMPORTANCE: i32 = 10;

/// Validate a whole analysis batch: per-task field checks plus batch-level
/// id uniqueness.
pub fn validate_batch(tasks: &[Task]) -> AnalyzerResult<()> {
    if tasks.is_empty() {
        return Err(AnalyzerError::validation_error("task list is empty"));
    }

    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        validate_task(task)?;
        if !seen_ids.insert(task.id) {
            return Err(AnalyzerError::validation_error(format!(
                "duplicate task id {}",
                task.id
            )));
        }
    }

    debug!("Validated batch of {} tasks", tasks.len());
    Ok(())
}

/// Field-level checks for a single task.
pub fn validate_task(task: &Task) -> AnalyzerResult<()> {
    if task.id <= 0 {
        return Err(AnalyzerError::validation_error(format!(
            "task id must be positive, got {}",
            task.id
        )));
    }
    if task.title.trim().is_empty() {
        return Err(AnalyzerError::validation_error(format!(
            "task {} has an empty title",
            task.id
        )));
    }
    if !task.estimated_hours.is_finite() || task.estimated_hours < MIN_ESTIMATED_HOURS {
        return Err(AnalyzerError::validation_error(format!(
            "task {}: estimated_hours must be at least {}, got {}",
            task.id, MIN_ESTIMATED_HOURS, task.estimated_hours
        )));
    }
    if task.estimated_hours > MAX_ESTIMATED_HOURS {
        return Err(AnalyzerError::validation_error(format!(
            "task {}: estimated_hours {} is unrealistic (max {})",
            task.id, task.estimated_hours, MAX_ESTIMATED_HOURS
        )));
    }
    if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&task.importance) {
        return Err(AnalyzerError::validation_error(format!(
            "task {}: importance must be in {}..={}, got {}",
            task.id, MIN_IMPORTANCE, MAX_IMPORTANCE, task.importance
        )));
    }
    Ok(())
}
