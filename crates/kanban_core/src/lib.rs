//! Core domain logic for the Kanban project tracker.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod context;
pub mod image;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod seed;
pub mod service;

pub use config::ReportConfig;
pub use context::{Board, BoardContext, ContextError, SharedBoard};
pub use image::{image_data_uri, ImageError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use model::task::{NewTask, Task, TaskDetailsPatch, TaskId, TaskStatus};
pub use repo::board_repo::{InMemoryBoardRepository, ProjectRepository, TaskRepository};
pub use repo::reorder::ColumnMove;
pub use report::file::ReportFile;
pub use report::generator::{GeminiReportGenerator, ReportError, ReportGenerator};
pub use report::job::{generate_report, spawn_report, PendingReport, ReportOutcome};
pub use report::request::ReportRequest;
pub use seed::seed_repository;
pub use service::board_service::{BoardResult, BoardService, BoardServiceError};
pub use service::dashboard::{DashboardSummary, ProjectStats, StatusCounts};
pub use service::project_name::normalize_project_name;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds the board service over the sample data, dated `today`.
pub fn seeded_board(today: chrono::NaiveDate) -> Board {
    BoardService::new(seed_repository(today))
}
