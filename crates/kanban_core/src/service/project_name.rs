//! Project name normalization.
//!
//! A project can be created from a plain name or from a GitHub repository
//! URL, in which case the repository name becomes the project name.

use once_cell::sync::Lazy;
use regex::Regex;

static GITHUB_REPO_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?github\.com/[^/]+/([^/?#]+)")
        .expect("valid github url regex")
});

/// Normalizes raw user input into a project name.
///
/// Returns `None` when the input is blank after trimming.
///
/// # Contract
/// - `https://github.com/acme/widget.git` -> `widget`.
/// - Any non-URL input is returned trimmed and otherwise verbatim.
pub fn normalize_project_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(repo) = GITHUB_REPO_URL_RE
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
    {
        let name = repo.as_str();
        let name = name.strip_suffix(".git").unwrap_or(name);
        // `github.com/acme/.git` would leave nothing; keep the raw input then.
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    Some(trimmed.to_string())
}
