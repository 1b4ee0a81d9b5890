//! Downloadable report artefact.

use std::io;
use std::path::{Path, PathBuf};

/// MIME type advertised for downloaded reports.
pub const REPORT_MIME_TYPE: &str = "text/markdown";

/// Generated report packaged as a Markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    file_name: String,
    content: String,
}

impl ReportFile {
    /// Names the file `<project_name>-report.md`.
    ///
    /// Path separators in the project name are replaced with `-` so the
    /// file always lands directly in the target directory.
    pub fn for_project(project_name: &str, content: impl Into<String>) -> Self {
        let safe_name = project_name.replace(['/', '\\'], "-");
        Self {
            file_name: format!("{safe_name}-report.md"),
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        REPORT_MIME_TYPE
    }

    /// UTF-8 encoded file body.
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Writes the report into `dir`, replacing any previous download.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, self.bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::ReportFile;

    #[test]
    fn file_is_named_after_project_and_written_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file = ReportFile::for_project("widget", "# Status ✓\n");

        let path = file.write_to_dir(dir.path()).unwrap();

        assert_eq!(file.file_name(), "widget-report.md");
        assert_eq!(file.mime_type(), "text/markdown");
        assert_eq!(path, dir.path().join("widget-report.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Status ✓\n");
    }

    #[test]
    fn separators_in_names_are_replaced() {
        let file = ReportFile::for_project("acme/widget", "");
        assert_eq!(file.file_name(), "acme-widget-report.md");
    }
}
