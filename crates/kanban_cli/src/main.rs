//! CLI probe over `kanban_core`.
//!
//! # Responsibility
//! - Exercise the seeded board from a terminal: list, move, report.
//! - Keep output deterministic apart from generated ids and dates.
//!
//! State lives in process memory only, so every invocation starts from
//! the sample board.

use clap::{Parser, Subcommand};
use kanban_core::{
    default_log_level, init_logging, seeded_board, spawn_report, BoardContext,
    GeminiReportGenerator, Project, ReportConfig, ReportFile, ReportOutcome, TaskStatus,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "kanban", version, about = "In-memory Kanban board probe")]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every column of one project, or of all projects.
    Board {
        #[arg(long)]
        project: Option<String>,
    },
    /// Print task counts per project and column.
    Dashboard,
    /// Move a task, then print its project board.
    Move {
        #[arg(long)]
        project: String,
        /// Exact task title.
        #[arg(long)]
        task: String,
        /// Target column: `todo`, `in_progress` or `done`.
        #[arg(long, value_parser = parse_status)]
        to: TaskStatus,
        /// Zero-based position in the target column.
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Generate a status report for one project.
    Report {
        #[arg(long)]
        project: String,
        /// Extra instruction appended to the report prompt.
        #[arg(long)]
        refine: Option<String>,
        /// Directory to write `<project>-report.md` into.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn parse_status(value: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(value).ok_or_else(|| format!("unknown column `{value}`"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    log::info!(
        "event=cli_command module=cli status=start command={:?}",
        cli.command
    );

    let today = chrono::Local::now().date_naive();
    let context = BoardContext::with_board(seeded_board(today));

    match run(cli.command, &context, today).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Command,
    context: &BoardContext,
    today: chrono::NaiveDate,
) -> Result<(), String> {
    match command {
        Command::Board { project } => {
            let projects = match project {
                Some(name) => vec![find_project(context, &name)?],
                None => context
                    .with(|board| board.projects())
                    .map_err(|e| e.to_string())?,
            };
            for project in projects {
                print_board(context, &project, today)?;
            }
        }
        Command::Dashboard => {
            let summary = context
                .with(|board| board.dashboard())
                .map_err(|e| e.to_string())?;
            println!(
                "all projects: {} tasks (to do {}, in progress {}, done {})",
                summary.overall.total(),
                summary.overall.to_do,
                summary.overall.in_progress,
                summary.overall.done
            );
            for row in summary.projects {
                println!(
                    "{}: {} tasks (to do {}, in progress {}, done {})",
                    row.name,
                    row.counts.total(),
                    row.counts.to_do,
                    row.counts.in_progress,
                    row.counts.done
                );
            }
        }
        Command::Move {
            project,
            task,
            to,
            index,
        } => {
            let project = find_project(context, &project)?;
            let moved = context
                .with(|board| {
                    let task = board
                        .tasks_by_project(project.id)
                        .into_iter()
                        .find(|candidate| candidate.title == task)?;
                    board.move_task(task.id, to, index)
                })
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("no task `{task}` in project `{}`", project.name))?;
            println!(
                "moved from {} #{} to {} #{}",
                moved.from_status, moved.from_order, moved.to_status, moved.to_order
            );
            print_board(context, &project, today)?;
        }
        Command::Report {
            project,
            refine,
            out,
        } => {
            let project = find_project(context, &project)?;
            let request = context
                .with(|board| board.report_request(project.id, refine.as_deref()))
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("unknown project `{}`", project.name))?;

            let generator = Arc::new(GeminiReportGenerator::new(ReportConfig::from_env()));
            match spawn_report(generator, request).wait().await {
                ReportOutcome::Ready(text) => {
                    println!("{text}");
                    if let Some(dir) = out {
                        let file = ReportFile::for_project(&project.name, text);
                        let path = file.write_to_dir(&dir).map_err(|e| e.to_string())?;
                        println!("saved {} ({})", path.display(), file.mime_type());
                    }
                }
                ReportOutcome::Failed(message) => return Err(message),
            }
        }
    }
    Ok(())
}

fn find_project(context: &BoardContext, name: &str) -> Result<Project, String> {
    context
        .with(|board| board.project_by_name(name))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("unknown project `{name}`"))
}

fn print_board(
    context: &BoardContext,
    project: &Project,
    today: chrono::NaiveDate,
) -> Result<(), String> {
    let tasks = context
        .with(|board| board.tasks_by_project(project.id))
        .map_err(|e| e.to_string())?;
    println!("== {}", project.name);
    for status in TaskStatus::ALL {
        println!("  [{status}]");
        for task in tasks.iter().filter(|task| task.status == status) {
            let due = match task.due_date {
                Some(date) if task.is_overdue(today) => format!(" (due {date}, overdue)"),
                Some(date) => format!(" (due {date})"),
                None => String::new(),
            };
            println!("    {}. {}{}", task.order, task.title, due);
        }
    }
    Ok(())
}
