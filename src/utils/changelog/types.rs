// changelog data structures

use crate::utils::severity::{Issue, IssueType};
use chrono::NaiveDate;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// raw changelog text together with where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    path: PathBuf,
    content: String,
}

impl ChangelogDocument {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// release headings (`## [x.y.z]`) in file order
    pub fn releases(&self) -> Vec<Release> {
        super::parser::parse_releases(&self.content)
    }
}

/// a released version heading, e.g. `## [1.0.0] - 2023-12-20`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: Version,
    pub date: Option<NaiveDate>,
    pub line_number: usize,
}

impl Release {
    pub fn new(version: Version, date: Option<NaiveDate>, line_number: usize) -> Self {
        Self {
            version,
            date,
            line_number,
        }
    }
}

/// bodies of the three subsections under `## [Unreleased]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnreleasedSection {
    pub added: String,
    pub changed: String,
    pub fixed: String,
}

impl UnreleasedSection {
    /// names of subsections whose trimmed body is empty
    pub fn empty_sections(&self) -> Vec<&'static str> {
        [
            ("Added", &self.added),
            ("Changed", &self.changed),
            ("Fixed", &self.fixed),
        ]
        .into_iter()
        .filter(|(_, body)| body.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.empty_sections().len() < 3
    }
}

/// outcome of one validation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub violations: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_violation(&mut self, issue_type: IssueType, message: impl Into<String>) {
        self.violations.push(Issue::error(issue_type, message));
    }

    pub fn add_warning(&mut self, issue_type: IssueType, message: impl Into<String>) {
        self.warnings.push(Issue::warning(issue_type, message));
    }

    pub fn push_violation(&mut self, issue: Issue) {
        self.violations.push(issue);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_messages(&self) -> Vec<&str> {
        self.violations.iter().map(|i| i.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|i| i.message.as_str()).collect()
    }

    pub fn has_violation(&self, issue_type: IssueType) -> bool {
        self.violations.iter().any(|i| i.issue_type == issue_type)
    }

    /// append another result, keeping violation order
    pub fn merge(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
        self.warnings.extend(other.warnings);
    }
}
