//! Board repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide project/task CRUD over process-memory state.
//! - Route every positional change through the reorder engine.
//!
//! # Invariants
//! - Every stored task references a stored project.
//! - Each `(project_id, status)` column holds ranks `0..len`.
//! - Repository writes do not validate user input; services do.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{NewTask, Task, TaskDetailsPatch, TaskId, TaskStatus};
use crate::repo::reorder::{self, ColumnMove};
use log::debug;
use uuid::Uuid;

/// Repository interface for project operations.
pub trait ProjectRepository {
    /// Stores a new project under a fresh id. `name` is used verbatim.
    fn create_project(&mut self, name: &str) -> Project;
    /// Removes one project and all of its tasks. Returns `false` when unknown.
    fn delete_project(&mut self, id: ProjectId) -> bool;
    fn get_project(&self, id: ProjectId) -> Option<Project>;
    /// Lists projects in insertion order.
    fn list_projects(&self) -> Vec<Project>;
}

/// Repository interface for task operations.
pub trait TaskRepository {
    /// Appends a task at the end of its column.
    fn create_task(&mut self, new_task: NewTask) -> Task;
    fn get_task(&self, id: TaskId) -> Option<Task>;
    /// Lists all tasks across projects.
    fn list_tasks(&self) -> Vec<Task>;
    /// Lists one project's tasks sorted ascending by `order`.
    ///
    /// All columns are mixed; callers filter by status.
    fn list_tasks_by_project(&self, project_id: ProjectId) -> Vec<Task>;
    /// Merges non-positional fields. Returns the updated task, if any.
    fn update_task_details(&mut self, id: TaskId, patch: &TaskDetailsPatch) -> Option<Task>;
    /// Removes one task and re-packs its former column.
    fn delete_task(&mut self, id: TaskId) -> bool;
    /// Moves one task to `status` at `index` within that column.
    fn move_task(&mut self, id: TaskId, status: TaskStatus, index: usize) -> Option<ColumnMove>;
}

/// Process-memory board storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

impl InMemoryBoardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds storage from preexisting records.
    ///
    /// Tasks referencing unknown projects are dropped and every column is
    /// re-packed, so the result always satisfies repository invariants.
    pub fn from_parts(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        let mut tasks = tasks;
        tasks.retain(|task| projects.iter().any(|project| project.id == task.project_id));
        for project in &projects {
            for status in TaskStatus::ALL {
                reorder::repack_column(&mut tasks, project.id, status);
            }
        }
        Self { projects, tasks }
    }
}

impl ProjectRepository for InMemoryBoardRepository {
    fn create_project(&mut self, name: &str) -> Project {
        let project = Project::new(name);
        self.projects.push(project.clone());
        project
    }

    fn delete_project(&mut self, id: ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);
        if self.projects.len() == before {
            return false;
        }

        let tasks_before = self.tasks.len();
        self.tasks.retain(|task| task.project_id != id);
        debug!(
            "event=project_delete module=repo status=ok cascaded_tasks={}",
            tasks_before - self.tasks.len()
        );
        true
    }

    fn get_project(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|project| project.id == id).cloned()
    }

    fn list_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }
}

impl TaskRepository for InMemoryBoardRepository {
    fn create_task(&mut self, new_task: NewTask) -> Task {
        let order = reorder::next_order(&self.tasks, new_task.project_id, new_task.status);
        let task = Task {
            id: Uuid::new_v4(),
            project_id: new_task.project_id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            order,
            due_date: new_task.due_date,
            image_url: new_task.image_url,
        };
        self.tasks.push(task.clone());
        task
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn list_tasks_by_project(&self, project_id: ProjectId) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| task.order);
        tasks
    }

    fn update_task_details(&mut self, id: TaskId, patch: &TaskDetailsPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        patch.apply_to(task);
        Some(task.clone())
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        let removed = self.tasks.remove(index);
        reorder::repack_column(&mut self.tasks, removed.project_id, removed.status);
        true
    }

    fn move_task(&mut self, id: TaskId, status: TaskStatus, index: usize) -> Option<ColumnMove> {
        reorder::move_task(&mut self.tasks, id, status, index)
    }
}
