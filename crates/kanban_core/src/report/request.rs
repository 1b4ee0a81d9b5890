//! Report request snapshot and prompt rendering.

use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use serde::Serialize;
use std::fmt::Write;

/// Placeholder rendered for a column without tasks.
pub const EMPTY_COLUMN_MARKER: &str = "None";

/// Structured context sent to the report service.
///
/// Built from a snapshot; later board mutations do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    pub project_name: String,
    pub tasks_to_do: Vec<String>,
    pub tasks_in_progress: Vec<String>,
    pub tasks_done: Vec<String>,
    pub refinement: Option<String>,
}

impl ReportRequest {
    /// Groups the project's task titles by column, each in column order.
    ///
    /// Tasks of other projects are ignored. A blank refinement is dropped.
    pub fn from_snapshot(project: &Project, tasks: &[Task], refinement: Option<&str>) -> Self {
        let titles = |status: TaskStatus| {
            let mut column: Vec<&Task> = tasks
                .iter()
                .filter(|task| task.in_column(project.id, status))
                .collect();
            column.sort_by_key(|task| task.order);
            column
                .into_iter()
                .map(|task| task.title.clone())
                .collect::<Vec<String>>()
        };

        Self {
            project_name: project.name.clone(),
            tasks_to_do: titles(TaskStatus::ToDo),
            tasks_in_progress: titles(TaskStatus::InProgress),
            tasks_done: titles(TaskStatus::Done),
            refinement: refinement
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    pub fn titles(&self, status: TaskStatus) -> &[String] {
        match status {
            TaskStatus::ToDo => &self.tasks_to_do,
            TaskStatus::InProgress => &self.tasks_in_progress,
            TaskStatus::Done => &self.tasks_done,
        }
    }

    /// Renders the instruction text sent to the service.
    pub fn render_prompt(&self) -> String {
        let mut prompt = String::from(
            "Analyze the following project status and generate a concise report in Markdown format.\n\
             The report should include:\n\
             1. A brief \"Project Status Summary\".\n\
             2. A list of \"Next Priority Actions\" based on the tasks in the \"To Do\" and \"In Progress\" columns.\n",
        );
        let _ = write!(prompt, "\nProject Name: {}\n", self.project_name);

        for status in TaskStatus::ALL {
            let _ = write!(prompt, "\nTasks {}:\n", status.label());
            let titles = self.titles(status);
            if titles.is_empty() {
                let _ = writeln!(prompt, "{EMPTY_COLUMN_MARKER}");
            }
            for title in titles {
                let _ = writeln!(prompt, "- {title}");
            }
        }

        if let Some(refinement) = &self.refinement {
            let _ = write!(prompt, "\nUser Refinement: {refinement}\n");
        }
        prompt
    }
}
