//! Runtime configuration for external collaborators.
//!
//! # Responsibility
//! - Resolve report-service settings from the process environment.
//! - Keep defaults in one place.
//!
//! # Invariants
//! - A blank credential is treated the same as a missing one.

/// Environment variable holding the report-service credential.
pub const API_KEY_ENV: &str = "API_KEY";
/// Environment variable overriding the report model name.
pub const REPORT_MODEL_ENV: &str = "KANBAN_REPORT_MODEL";
/// Environment variable overriding the report-service base URL.
pub const REPORT_BASE_URL_ENV: &str = "KANBAN_REPORT_BASE_URL";

pub const DEFAULT_REPORT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_REPORT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for the report generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_REPORT_MODEL.to_string(),
            base_url: DEFAULT_REPORT_BASE_URL.to_string(),
        }
    }
}

impl ReportConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_key: non_blank(API_KEY_ENV),
            model: non_blank(REPORT_MODEL_ENV).unwrap_or_else(|| DEFAULT_REPORT_MODEL.to_string()),
            base_url: non_blank(REPORT_BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_REPORT_BASE_URL.to_string()),
        }
    }

    /// Returns whether a credential is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportConfig, DEFAULT_REPORT_BASE_URL, DEFAULT_REPORT_MODEL};
    use std::collections::HashMap;

    #[test]
    fn from_lookup_applies_defaults() {
        let config = ReportConfig::from_lookup(|_| None);
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.model, DEFAULT_REPORT_MODEL);
        assert_eq!(config.base_url, DEFAULT_REPORT_BASE_URL);
        assert!(!config.has_api_key());
    }

    #[test]
    fn from_lookup_reads_overrides_and_ignores_blank_key() {
        let values = HashMap::from([
            ("API_KEY", "   "),
            ("KANBAN_REPORT_MODEL", "gemini-pro"),
            ("KANBAN_REPORT_BASE_URL", "http://localhost:9000/v1"),
        ]);
        let config = ReportConfig::from_lookup(|key| values.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_key, None);
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
    }
}
