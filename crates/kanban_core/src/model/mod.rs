//! Board domain model for projects and their Kanban tasks.
//!
//! # Responsibility
//! - Define canonical project/task records shared by repositories and services.
//! - Define the fixed set of Kanban columns.
//!
//! # Invariants
//! - Every domain object is identified by a stable, never reused `Uuid`.
//! - Task `order` is meaningful only inside its `(project_id, status)` column.

pub mod project;
pub mod task;
