//! Task domain model.
//!
//! # Responsibility
//! - Define the Kanban task record and its column status.
//! - Define creation and detail-update payloads.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `status` and `order` change only through the repository move operation.
//! - `TaskDetailsPatch` cannot express a positional change.

use crate::model::project::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable task identifier.
pub type TaskId = uuid::Uuid;

/// Kanban column a task currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    ToDo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// All columns in board display order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Human-facing column label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Parses either a column label (`In Progress`) or a snake_case key
    /// (`in_progress`), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "to_do" | "todo" => Some(Self::ToDo),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One Kanban card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Zero-based rank inside the `(project_id, status)` column.
    pub order: usize,
    /// Calendar date without time-of-day.
    pub due_date: Option<NaiveDate>,
    /// Opaque image reference, usually a `data:` URI.
    pub image_url: Option<String>,
}

impl Task {
    /// Returns whether this task belongs to the given column.
    pub fn in_column(&self, project_id: ProjectId, status: TaskStatus) -> bool {
        self.project_id == project_id && self.status == status
    }

    /// Returns whether the due date has passed and the task is still open.
    ///
    /// Comparison is by calendar day: a task due today is not overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && self.status != TaskStatus::Done,
            None => false,
        }
    }
}

/// Creation payload. Identity and column rank are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub project_id: ProjectId,
    pub title: String,
    pub status: TaskStatus,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

impl NewTask {
    /// Creates a payload with only the required fields set.
    pub fn new(project_id: ProjectId, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            project_id,
            title: title.into(),
            status,
            description: None,
            due_date: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Shallow merge of non-positional task fields.
///
/// Outer `None` leaves a field untouched. For optional fields,
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetailsPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub image_url: Option<Option<String>>,
}

impl TaskDetailsPatch {
    /// Applies this patch to `task` in place.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(image_url) = &self.image_url {
            task.image_url = image_url.clone();
        }
    }

    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.image_url.is_none()
    }
}
