//! Sample board loaded at process start.

use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use crate::repo::board_repo::InMemoryBoardRepository;
use chrono::{Days, NaiveDate};
use uuid::Uuid;

struct SeedTask {
    project: usize,
    title: &'static str,
    description: Option<&'static str>,
    status: TaskStatus,
    order: usize,
    /// Offset in days from the seeding date.
    due_in_days: Option<i64>,
}

const SEED_PROJECTS: [&str; 4] = ["pf", "pf-fullstack", "pf-react", "gh-repo-name"];

const SEED_TASKS: [SeedTask; 10] = [
    SeedTask {
        project: 0,
        title: "Setup project structure",
        description: Some("Initialize repository and basic file structure."),
        status: TaskStatus::Done,
        order: 0,
        due_in_days: None,
    },
    SeedTask {
        project: 0,
        title: "Design UI mockups",
        description: Some("Create wireframes and mockups in Figma."),
        status: TaskStatus::InProgress,
        order: 0,
        due_in_days: Some(-5),
    },
    SeedTask {
        project: 0,
        title: "Develop Kanban board component",
        description: Some("Build the core drag-and-drop feature."),
        status: TaskStatus::InProgress,
        order: 1,
        due_in_days: Some(-2),
    },
    SeedTask {
        project: 0,
        title: "Implement AI reporting",
        description: Some("Integrate with Gemini API."),
        status: TaskStatus::ToDo,
        order: 0,
        due_in_days: Some(10),
    },
    SeedTask {
        project: 1,
        title: "Define database schema",
        description: Some("Plan the tables for projects, tasks, and users."),
        status: TaskStatus::Done,
        order: 0,
        due_in_days: None,
    },
    SeedTask {
        project: 1,
        title: "Build REST API endpoints",
        description: None,
        status: TaskStatus::InProgress,
        order: 0,
        due_in_days: None,
    },
    SeedTask {
        project: 1,
        title: "Setup user authentication",
        description: None,
        status: TaskStatus::ToDo,
        order: 0,
        due_in_days: Some(20),
    },
    SeedTask {
        project: 2,
        title: "Component library selection",
        description: None,
        status: TaskStatus::Done,
        order: 0,
        due_in_days: None,
    },
    SeedTask {
        project: 2,
        title: "State management with Context",
        description: Some("Implement global state for projects."),
        status: TaskStatus::Done,
        order: 1,
        due_in_days: None,
    },
    SeedTask {
        project: 3,
        title: "Write project README",
        description: None,
        status: TaskStatus::ToDo,
        order: 0,
        due_in_days: None,
    },
];

/// Builds the sample board with due dates relative to `today`.
pub fn seed_repository(today: NaiveDate) -> InMemoryBoardRepository {
    let projects: Vec<Project> = SEED_PROJECTS.iter().map(|name| Project::new(*name)).collect();
    let tasks = SEED_TASKS
        .iter()
        .map(|seed| Task {
            id: Uuid::new_v4(),
            project_id: projects[seed.project].id,
            title: seed.title.to_string(),
            description: seed.description.map(str::to_string),
            status: seed.status,
            order: seed.order,
            due_date: seed.due_in_days.and_then(|days| offset_date(today, days)),
            image_url: None,
        })
        .collect();
    InMemoryBoardRepository::from_parts(projects, tasks)
}

fn offset_date(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        today.checked_add_days(magnitude)
    } else {
        today.checked_sub_days(magnitude)
    }
}
