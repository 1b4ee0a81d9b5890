//! Board use-case service.
//!
//! # Responsibility
//! - Validate project/task input above the repository layer.
//! - Expose the board operations the presentation layer invokes.
//! - Take report snapshots and dashboard projections.
//!
//! # Invariants
//! - Project names are normalized before storage and never blank.
//! - Task titles are trimmed and never blank.
//! - Tasks are only created for live projects.
//! - Positional changes go through `move_task` only.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{NewTask, Task, TaskDetailsPatch, TaskId, TaskStatus};
use crate::repo::board_repo::{ProjectRepository, TaskRepository};
use crate::repo::reorder::ColumnMove;
use crate::report::request::ReportRequest;
use crate::service::dashboard::{self, DashboardSummary};
use crate::service::project_name::normalize_project_name;
use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by board service operations.
pub type BoardResult<T> = Result<T, BoardServiceError>;

/// Validation errors raised at the board edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Project name or URL is blank after trim.
    EmptyProjectName,
    /// Task title is blank after trim.
    EmptyTitle,
    /// Task targets a project that does not exist.
    ProjectNotFound(ProjectId),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName => write!(f, "project name must not be blank"),
            Self::EmptyTitle => write!(f, "task title must not be blank"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for BoardServiceError {}

/// Board service facade.
#[derive(Debug, Clone, Default)]
pub struct BoardService<R> {
    repo: R,
}

impl<R: ProjectRepository + TaskRepository> BoardService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Creates a project from a plain name or a GitHub repository URL.
    pub fn add_project(&mut self, name_or_url: &str) -> BoardResult<Project> {
        let name = normalize_project_name(name_or_url).ok_or(BoardServiceError::EmptyProjectName)?;
        let project = self.repo.create_project(&name);
        info!(
            "event=project_add module=service status=ok project_id={}",
            project.id
        );
        Ok(project)
    }

    /// Deletes a project and its tasks. Unknown ids are a no-op.
    pub fn delete_project(&mut self, project_id: ProjectId) -> bool {
        let deleted = self.repo.delete_project(project_id);
        info!(
            "event=project_delete module=service status={} project_id={}",
            if deleted { "ok" } else { "skip" },
            project_id
        );
        deleted
    }

    pub fn project(&self, project_id: ProjectId) -> Option<Project> {
        self.repo.get_project(project_id)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.repo.list_projects()
    }

    /// Finds the first project with exactly this name.
    pub fn project_by_name(&self, name: &str) -> Option<Project> {
        self.repo
            .list_projects()
            .into_iter()
            .find(|project| project.name == name.trim())
    }

    /// All tasks of a project, ascending by `order`, every column mixed.
    pub fn tasks_by_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.repo.list_tasks_by_project(project_id)
    }

    /// One column of a project, in display order.
    pub fn column(&self, project_id: ProjectId, status: TaskStatus) -> Vec<Task> {
        self.repo
            .list_tasks_by_project(project_id)
            .into_iter()
            .filter(|task| task.status == status)
            .collect()
    }

    pub fn task(&self, task_id: TaskId) -> Option<Task> {
        self.repo.get_task(task_id)
    }

    /// Appends a new task to the end of its column.
    pub fn add_task(&mut self, new_task: NewTask) -> BoardResult<Task> {
        let title = normalize_title(&new_task.title)?;
        if self.repo.get_project(new_task.project_id).is_none() {
            return Err(BoardServiceError::ProjectNotFound(new_task.project_id));
        }

        let task = self.repo.create_task(NewTask {
            title,
            description: normalize_description(new_task.description),
            ..new_task
        });
        info!(
            "event=task_add module=service status=ok task_id={} column={:?} order={}",
            task.id, task.status, task.order
        );
        Ok(task)
    }

    /// Updates non-positional task fields. Unknown ids return `Ok(None)`.
    pub fn update_task_details(
        &mut self,
        task_id: TaskId,
        patch: TaskDetailsPatch,
    ) -> BoardResult<Option<Task>> {
        let patch = TaskDetailsPatch {
            title: patch
                .title
                .as_deref()
                .map(normalize_title)
                .transpose()?,
            description: patch.description.map(normalize_description),
            ..patch
        };
        if patch.is_empty() {
            return Ok(self.repo.get_task(task_id));
        }

        let updated = self.repo.update_task_details(task_id, &patch);
        debug!(
            "event=task_update module=service status={} task_id={}",
            if updated.is_some() { "ok" } else { "skip" },
            task_id
        );
        Ok(updated)
    }

    /// Deletes a task and closes the gap it leaves. Unknown ids are a no-op.
    pub fn delete_task(&mut self, task_id: TaskId) -> bool {
        let deleted = self.repo.delete_task(task_id);
        info!(
            "event=task_delete module=service status={} task_id={}",
            if deleted { "ok" } else { "skip" },
            task_id
        );
        deleted
    }

    /// Moves a task to `status` at zero-based `index` in that column.
    ///
    /// Indices past the end append. Unknown ids return `None`.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        status: TaskStatus,
        index: usize,
    ) -> Option<ColumnMove> {
        let moved = self.repo.move_task(task_id, status, index);
        match &moved {
            Some(column_move) => info!(
                "event=task_move module=service status=ok task_id={} from={:?}:{} to={:?}:{}",
                task_id,
                column_move.from_status,
                column_move.from_order,
                column_move.to_status,
                column_move.to_order
            ),
            None => debug!(
                "event=task_move module=service status=skip task_id={}",
                task_id
            ),
        }
        moved
    }

    /// Tasks of a project that are past due as of `today`.
    pub fn overdue_tasks(&self, project_id: ProjectId, today: NaiveDate) -> Vec<Task> {
        self.repo
            .list_tasks_by_project(project_id)
            .into_iter()
            .filter(|task| task.is_overdue(today))
            .collect()
    }

    pub fn dashboard(&self) -> DashboardSummary {
        dashboard::summarize(&self.repo.list_projects(), &self.repo.list_tasks())
    }

    /// Snapshots a project's tasks into a report request.
    ///
    /// Returns `None` when the project does not exist.
    pub fn report_request(
        &self,
        project_id: ProjectId,
        refinement: Option<&str>,
    ) -> Option<ReportRequest> {
        let project = self.repo.get_project(project_id)?;
        let tasks = self.repo.list_tasks_by_project(project_id);
        Some(ReportRequest::from_snapshot(&project, &tasks, refinement))
    }
}

fn normalize_title(title: &str) -> BoardResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardServiceError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
