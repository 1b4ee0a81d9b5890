//! Dashboard statistics over board state.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskStatus};
use serde::Serialize;

/// Task counts per Kanban column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub to_do: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    /// Counts tasks per status.
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::ToDo => counts.to_do += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::ToDo => self.to_do,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.to_do + self.in_progress + self.done
    }
}

/// Per-project dashboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub project_id: ProjectId,
    pub name: String,
    pub counts: StatusCounts,
}

/// Whole-board dashboard projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub overall: StatusCounts,
    /// One row per project, in project list order, zero counts included.
    pub projects: Vec<ProjectStats>,
}

/// Builds the dashboard projection for the given state.
pub fn summarize(projects: &[Project], tasks: &[Task]) -> DashboardSummary {
    let rows = projects
        .iter()
        .map(|project| ProjectStats {
            project_id: project.id,
            name: project.name.clone(),
            counts: StatusCounts::tally(tasks.iter().filter(|task| task.project_id == project.id)),
        })
        .collect();

    DashboardSummary {
        overall: StatusCounts::tally(tasks),
        projects: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::{summarize, StatusCounts};
    use crate::model::project::Project;
    use crate::model::task::{Task, TaskStatus};
    use uuid::Uuid;

    fn card(project: &Project, status: TaskStatus) -> Task {
        Task {
            id: Uuid::new_v4(),
            project_id: project.id,
            title: "t".to_string(),
            description: None,
            status,
            order: 0,
            due_date: None,
            image_url: None,
        }
    }

    #[test]
    fn summarize_counts_overall_and_per_project() {
        let alpha = Project::new("alpha");
        let empty = Project::new("empty");
        let tasks = vec![
            card(&alpha, TaskStatus::ToDo),
            card(&alpha, TaskStatus::Done),
            card(&alpha, TaskStatus::Done),
        ];

        let summary = summarize(&[alpha.clone(), empty.clone()], &tasks);

        assert_eq!(summary.overall.total(), 3);
        assert_eq!(summary.overall.get(TaskStatus::Done), 2);
        assert_eq!(summary.projects.len(), 2);
        assert_eq!(summary.projects[0].name, "alpha");
        assert_eq!(summary.projects[0].counts.to_do, 1);
        assert_eq!(summary.projects[1].counts, StatusCounts::default());
    }
}
