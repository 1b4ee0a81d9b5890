//! Report generator contract and Gemini-backed implementation.
//!
//! # Responsibility
//! - Define the async seam between the board core and the text service.
//! - Translate a `ReportRequest` into a `generateContent` call.
//!
//! # Invariants
//! - A missing credential fails before any network I/O.
//! - The service's text is returned as-is; it is never inspected.
//! - No retries and no application-level timeout.

use crate::config::ReportConfig;
use crate::report::request::ReportRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum number of response-body characters kept in error values.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Errors raised while producing a report.
#[derive(Debug)]
pub enum ReportError {
    /// No credential configured.
    MissingApiKey,
    /// Request could not be sent or the body could not be read.
    Transport(reqwest::Error),
    /// Service answered with a non-success status.
    BadResponse { status: u16, body: Option<String> },
    /// Service answered successfully but without any text.
    EmptyResponse,
    /// Background report task ended without a result.
    Interrupted(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(
                f,
                "API_KEY is not configured; set the API_KEY environment variable"
            ),
            Self::Transport(err) => write!(f, "report service unreachable: {err}"),
            Self::BadResponse { status, body } => match body {
                Some(body) => write!(f, "report service returned status {status}: {body}"),
                None => write!(f, "report service returned status {status}"),
            },
            Self::EmptyResponse => write!(f, "report service returned no text"),
            Self::Interrupted(details) => write!(f, "report generation interrupted: {details}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// External text-generation collaborator.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Produces free-text (Markdown) analysis for one request.
    async fn generate(&self, request: &ReportRequest) -> Result<String, ReportError>;
}

/// `generateContent` client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiReportGenerator {
    http_client: reqwest::Client,
    config: ReportConfig,
}

#[derive(Debug, Serialize)]
struct GenerateContentBody<'a> {
    contents: Vec<ContentBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ContentBody<'a> {
    parts: Vec<PartBody<'a>>,
}

#[derive(Debug, Serialize)]
struct PartBody<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Uses a caller-provided HTTP client (proxies, timeouts, test servers).
    pub fn with_client(http_client: reqwest::Client, config: ReportConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl ReportGenerator for GeminiReportGenerator {
    async fn generate(&self, request: &ReportRequest) -> Result<String, ReportError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ReportError::MissingApiKey)?;

        let prompt = request.render_prompt();
        let body = GenerateContentBody {
            contents: vec![ContentBody {
                parts: vec![PartBody {
                    text: prompt.as_str(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .ok()
                .map(|text| text.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>())
                .filter(|text| !text.is_empty());
            return Err(ReportError::BadResponse {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text().ok_or(ReportError::EmptyResponse)
    }
}
