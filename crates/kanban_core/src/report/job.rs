//! Asynchronous report jobs.
//!
//! # Responsibility
//! - Run one report request off the caller's path on a Tokio task.
//! - Convert the result into a display-ready outcome.
//!
//! # Invariants
//! - Jobs own their request snapshot; they hold no board lock.
//! - `ReportOutcome` construction never panics and never propagates errors.
//! - Abandoning a job detaches it; its result is dropped on completion.

use crate::report::generator::{ReportError, ReportGenerator};
use crate::report::request::ReportRequest;
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

/// Display-ready result of a report call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Report text returned by the service.
    Ready(String),
    /// Human-readable failure message for the error banner.
    Failed(String),
}

impl ReportOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Report text or error message.
    pub fn text(&self) -> &str {
        match self {
            Self::Ready(text) | Self::Failed(text) => text,
        }
    }
}

impl From<Result<String, ReportError>> for ReportOutcome {
    fn from(value: Result<String, ReportError>) -> Self {
        match value {
            Ok(text) => Self::Ready(text),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Runs one report request and logs its duration and status.
pub async fn generate_report(
    generator: &dyn ReportGenerator,
    request: &ReportRequest,
) -> ReportOutcome {
    let started_at = Instant::now();
    info!(
        "event=report_generate module=report status=start refined={}",
        request.refinement.is_some()
    );

    let result = generator.generate(request).await;
    match &result {
        Ok(text) => info!(
            "event=report_generate module=report status=ok duration_ms={} chars={}",
            started_at.elapsed().as_millis(),
            text.chars().count()
        ),
        Err(err) => warn!(
            "event=report_generate module=report status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    ReportOutcome::from(result)
}

/// Handle to a report running in the background.
#[derive(Debug)]
pub struct PendingReport {
    project_name: String,
    handle: JoinHandle<ReportOutcome>,
}

/// Starts a report job on the current Tokio runtime.
///
/// # Panics
/// - Panics when called outside a Tokio runtime context.
pub fn spawn_report(generator: Arc<dyn ReportGenerator>, request: ReportRequest) -> PendingReport {
    let project_name = request.project_name.clone();
    let handle =
        tokio::spawn(async move { generate_report(generator.as_ref(), &request).await });
    PendingReport {
        project_name,
        handle,
    }
}

impl PendingReport {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the job. Task failures surface as `ReportOutcome::Failed`.
    pub async fn wait(self) -> ReportOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                ReportOutcome::Failed(ReportError::Interrupted(err.to_string()).to_string())
            }
        }
    }

    /// Stops caring about the result. The job keeps running and its
    /// outcome is dropped when it completes.
    pub fn abandon(self) {
        info!("event=report_abandon module=report status=ok");
        drop(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_report, spawn_report, ReportOutcome};
    use crate::model::project::Project;
    use crate::report::generator::{ReportError, ReportGenerator};
    use crate::report::request::ReportRequest;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct EchoGenerator;

    #[async_trait]
    impl ReportGenerator for EchoGenerator {
        async fn generate(&self, request: &ReportRequest) -> Result<String, ReportError> {
            Ok(request.render_prompt())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ReportGenerator for FailingGenerator {
        async fn generate(&self, _request: &ReportRequest) -> Result<String, ReportError> {
            Err(ReportError::BadResponse {
                status: 503,
                body: None,
            })
        }
    }

    struct GatedGenerator {
        gate: Arc<Notify>,
        completed: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ReportGenerator for GatedGenerator {
        async fn generate(&self, _request: &ReportRequest) -> Result<String, ReportError> {
            self.gate.notified().await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok("late".to_string())
        }
    }

    fn request() -> ReportRequest {
        ReportRequest::from_snapshot(&Project::new("widget"), &[], None)
    }

    #[tokio::test]
    async fn empty_board_still_yields_ready_report_with_none_markers() {
        let outcome = generate_report(&EchoGenerator, &request()).await;

        assert!(outcome.is_ready());
        assert_eq!(outcome.text().matches("None").count(), 3);
    }

    #[tokio::test]
    async fn failures_become_messages() {
        let outcome = generate_report(&FailingGenerator, &request()).await;

        assert_eq!(
            outcome,
            ReportOutcome::Failed("report service returned status 503".to_string())
        );
    }

    #[tokio::test]
    async fn spawned_report_resolves() {
        let pending = spawn_report(Arc::new(EchoGenerator), request());
        assert_eq!(pending.project_name(), "widget");

        let outcome = pending.wait().await;
        assert!(outcome.text().contains("Project Name: widget"));
    }

    #[tokio::test]
    async fn abandoned_report_runs_to_completion_and_is_discarded() {
        let gate = Arc::new(Notify::new());
        let completed = Arc::new(AtomicUsize::new(0));
        let generator = GatedGenerator {
            gate: Arc::clone(&gate),
            completed: Arc::clone(&completed),
        };

        let pending = spawn_report(Arc::new(generator), request());
        assert!(!pending.is_finished());
        pending.abandon();

        gate.notify_one();
        for _ in 0..100 {
            if completed.load(Ordering::SeqCst) == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }
}
