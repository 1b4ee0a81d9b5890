//! Repository layer: board storage contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for projects and tasks.
//! - Own the task list and keep per-column ranks dense.
//!
//! # Invariants
//! - Unknown ids are idempotent no-ops, never errors.
//! - Task `status`/`order` change only through `TaskRepository::move_task`.
//! - Deleting a project deletes every task that references it.

pub mod board_repo;
pub mod reorder;
