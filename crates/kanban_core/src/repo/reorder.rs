//! Column reordering for task moves.
//!
//! # Responsibility
//! - Recompute column ranks when a task changes column and/or position.
//! - Re-pack a column after a member leaves it.
//!
//! # Invariants
//! - After every call, each touched `(project_id, status)` column holds
//!   ranks `0..len` with no gaps and no duplicates.
//! - Tasks outside the source and destination columns are never modified.
//! - Ties on `order` keep their current relative position in storage.

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskStatus};

/// Result of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMove {
    pub task_id: TaskId,
    pub from_status: TaskStatus,
    pub from_order: usize,
    pub to_status: TaskStatus,
    /// Final rank in the destination column (clamped index).
    pub to_order: usize,
}

impl ColumnMove {
    /// Returns whether the task ended exactly where it started.
    pub fn is_noop(&self) -> bool {
        self.from_status == self.to_status && self.from_order == self.to_order
    }
}

/// Returns the rank a task appended to the column would receive.
pub fn next_order(tasks: &[Task], project_id: ProjectId, status: TaskStatus) -> usize {
    tasks
        .iter()
        .filter(|task| task.in_column(project_id, status))
        .count()
}

/// Reassigns dense ranks to one column, keeping current relative order.
pub fn repack_column(tasks: &mut [Task], project_id: ProjectId, status: TaskStatus) {
    let positions = column_positions(tasks, project_id, status, None);
    assign_ranks(tasks, &positions);
}

/// Moves one task to `new_status` at `new_index` within that column.
///
/// `new_index` follows list insertion semantics after the task has been
/// taken out of its column: values past the end append.
///
/// Returns `None` without touching anything when `task_id` is unknown.
pub fn move_task(
    tasks: &mut [Task],
    task_id: TaskId,
    new_status: TaskStatus,
    new_index: usize,
) -> Option<ColumnMove> {
    let moved_at = tasks.iter().position(|task| task.id == task_id)?;
    let project_id = tasks[moved_at].project_id;
    let from_status = tasks[moved_at].status;
    let from_order = tasks[moved_at].order;

    if from_status != new_status {
        let remaining = column_positions(tasks, project_id, from_status, Some(moved_at));
        assign_ranks(tasks, &remaining);
    }

    let mut destination = column_positions(tasks, project_id, new_status, Some(moved_at));
    let to_order = new_index.min(destination.len());
    destination.insert(to_order, moved_at);

    tasks[moved_at].status = new_status;
    assign_ranks(tasks, &destination);

    Some(ColumnMove {
        task_id,
        from_status,
        from_order,
        to_status: new_status,
        to_order,
    })
}

/// Returns storage indices of one column sorted by rank.
fn column_positions(
    tasks: &[Task],
    project_id: ProjectId,
    status: TaskStatus,
    exclude: Option<usize>,
) -> Vec<usize> {
    let mut positions: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(index, task)| Some(*index) != exclude && task.in_column(project_id, status))
        .map(|(index, _)| index)
        .collect();
    // Stable sort: equal ranks keep storage order.
    positions.sort_by_key(|index| tasks[*index].order);
    positions
}

fn assign_ranks(tasks: &mut [Task], positions: &[usize]) {
    for (rank, index) in positions.iter().enumerate() {
        tasks[*index].order = rank;
    }
}
