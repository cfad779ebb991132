//! Delayed-task report.

use crate::task::domain::Task;
use chrono::NaiveDate;

/// One row of the delayed-task listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedEntry {
    /// The overdue task.
    pub task: Task,
    /// Whole days past the deadline, floored at zero.
    pub days_delayed: i64,
}

/// Lists every delayed task with its days-late count, preserving input
/// order.
///
/// Uses the board's delay rule: overdue and not `Complete`. Day counts are
/// `today - dead_line` in whole days, floored at zero.
#[must_use]
pub fn delayed_report(tasks: &[Task], today: NaiveDate) -> Vec<DelayedEntry> {
    tasks
        .iter()
        .filter(|task| task.is_delayed(today))
        .map(|task| DelayedEntry {
            task: task.clone(),
            days_delayed: (today - task.dead_line()).num_days().max(0),
        })
        .collect()
}
