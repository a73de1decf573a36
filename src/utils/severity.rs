use serde::{Deserialize, Serialize};
use std::fmt;

/// severity level for issues detected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// violation that makes the changelog invalid
    Error,
    /// advisory only, never affects validity
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "ERROR"),
            IssueSeverity::Warning => write!(f, "WARN"),
        }
    }
}

/// rule or check that produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// changelog has no content
    EmptyChangelog,
    /// "Change Log" title header is missing
    MissingHeader,
    /// no `## [x.y.z]` release heading
    MissingVersionEntry,
    /// no `## [Unreleased]` heading
    MissingUnreleased,
    /// unreleased block lacks the Added/Changed/Fixed structure
    BadUnreleasedFormat,
    /// all unreleased subsections are empty
    EmptyUnreleased,
    /// changelog has no diff against the base ref
    ChangelogNotUpdated,
    /// update check could not run
    UpdateCheckSkipped,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::EmptyChangelog => write!(f, "empty_changelog"),
            IssueType::MissingHeader => write!(f, "missing_header"),
            IssueType::MissingVersionEntry => write!(f, "missing_version_entry"),
            IssueType::MissingUnreleased => write!(f, "missing_unreleased"),
            IssueType::BadUnreleasedFormat => write!(f, "bad_unreleased_format"),
            IssueType::EmptyUnreleased => write!(f, "empty_unreleased"),
            IssueType::ChangelogNotUpdated => write!(f, "changelog_not_updated"),
            IssueType::UpdateCheckSkipped => write!(f, "update_check_skipped"),
        }
    }
}

/// structured issue with severity, type, and message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// severity level of the issue
    pub severity: IssueSeverity,
    /// type of the issue
    pub issue_type: IssueType,
    /// human-readable message describing the issue
    pub message: String,
    /// extra context, e.g. which subsection broke the expected layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Issue {
    /// create a new issue
    pub fn new(severity: IssueSeverity, issue_type: IssueType, message: String) -> Self {
        Self {
            severity,
            issue_type,
            message,
            detail: None,
        }
    }

    pub fn error(issue_type: IssueType, message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Error, issue_type, message.into())
    }

    pub fn warning(issue_type: IssueType, message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Warning, issue_type, message.into())
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// check if this is an error-level issue
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    /// check if this is a warning-level issue
    pub fn is_warning(&self) -> bool {
        self.severity == IssueSeverity::Warning
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_uses_severity_tag() {
        let issue = Issue::error(IssueType::MissingHeader, "missing header");
        assert_eq!(issue.to_string(), "[ERROR] missing header");
        assert!(issue.is_error());
    }

    #[test]
    fn test_issue_detail_is_kept_out_of_display() {
        let issue = Issue::warning(IssueType::UpdateCheckSkipped, "skipped")
            .with_detail("no remote");
        assert_eq!(issue.to_string(), "[WARN] skipped");
        assert_eq!(issue.detail.as_deref(), Some("no remote"));
        assert!(issue.is_warning());
    }

    #[test]
    fn test_issue_type_serializes_snake_case() {
        let json = serde_json::to_string(&IssueType::BadUnreleasedFormat).unwrap();
        assert_eq!(json, "\"bad_unreleased_format\"");
    }
}
