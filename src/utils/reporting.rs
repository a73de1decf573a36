// CI step summary reporting

use super::changelog::ValidationResult;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// configuration for the CI summary sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// write a step summary when running in GitHub Actions
    pub step_summary: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self { step_summary: true }
    }
}

/// destination for markdown summaries
pub trait SummarySink {
    fn write(&mut self, markdown: &str) -> Result<()>;
}

/// appends to the file GitHub Actions exposes as `GITHUB_STEP_SUMMARY`
#[derive(Debug, Clone)]
pub struct StepSummaryFile {
    path: PathBuf,
}

impl StepSummaryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// build a sink from environment lookups when running in GitHub Actions
    pub fn detect<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("GITHUB_ACTIONS")?;
        lookup("GITHUB_STEP_SUMMARY")
            .filter(|path| !path.trim().is_empty())
            .map(Self::new)
    }
}

impl SummarySink for StepSummaryFile {
    fn write(&mut self, markdown: &str) -> Result<()> {
        let to_error = |source| Error::SummaryWriteError {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;
        file.write_all(markdown.as_bytes()).map_err(to_error)
    }
}

pub fn render_passed(path: &Path) -> String {
    format!(
        "### ✅ Changelog Validation Passed\n\n- File: `{}`\n- All validation rules passed\n",
        path.display()
    )
}

pub fn render_failed<S: AsRef<str>>(violations: &[S]) -> String {
    let mut out = String::from(
        "### ❌ Changelog Validation Failed\n\nThe following issues were found:\n\n",
    );
    for violation in violations {
        out.push_str(&format!("- {}\n", violation.as_ref()));
    }
    out
}

pub fn render_warning(warning: &str) -> String {
    format!("### Warning\n{}\n\n", warning)
}

pub fn render_error(message: &str) -> String {
    format!("### ❌ Changelog Validation Error\n\n{}\n", message)
}

/// warning blocks followed by the pass or fail block
pub fn render_result(path: &Path, result: &ValidationResult) -> String {
    let mut out: String = result
        .warning_messages()
        .into_iter()
        .map(render_warning)
        .collect();

    if result.is_valid() {
        out.push_str(&render_passed(path));
    } else {
        out.push_str(&render_failed(&result.violation_messages()));
    }
    out
}
