// changelog validator

use super::parser::{UNRELEASED_HEADING, heading, parse_unreleased_section};
use super::types::{ChangelogDocument, ValidationResult};
use crate::utils::severity::{Issue, IssueType};
use regex::Regex;
use std::sync::LazyLock;

pub const UNRELEASED_FORMAT_MESSAGE: &str =
    "Unreleased section must follow the format: Added, Changed, Fixed";
pub const UNRELEASED_EMPTY_MESSAGE: &str =
    "At least one of the sections (Added, Changed, Fixed) must contain changes";

static VERSION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## \[\d+\.\d+\.\d+\]").expect("version header pattern"));

/// named predicate over changelog text
pub struct ValidationRule {
    pub name: &'static str,
    pub issue_type: IssueType,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl ValidationRule {
    pub fn passes(&self, content: &str) -> bool {
        (self.check)(content)
    }
}

/// structural rules in reporting order
pub const RULES: &[ValidationRule] = &[
    ValidationRule {
        name: "non-empty",
        issue_type: IssueType::EmptyChangelog,
        message: "Changelog cannot be empty",
        check: is_non_empty,
    },
    ValidationRule {
        name: "title-header",
        issue_type: IssueType::MissingHeader,
        message: "Changelog must have a \"Change Log\" header",
        check: has_title_header,
    },
    ValidationRule {
        name: "version-entry",
        issue_type: IssueType::MissingVersionEntry,
        message: "Changelog must contain at least one semantic version header",
        check: has_version_header,
    },
    ValidationRule {
        name: "unreleased-marker",
        issue_type: IssueType::MissingUnreleased,
        message: "Changelog must contain an Unreleased section",
        check: has_unreleased_marker,
    },
];

fn is_non_empty(content: &str) -> bool {
    !content.is_empty()
}

fn has_title_header(content: &str) -> bool {
    content
        .lines()
        .any(|line| matches!(heading(line), Some((_, "Change Log"))))
}

fn has_version_header(content: &str) -> bool {
    VERSION_HEADER.is_match(content)
}

fn has_unreleased_marker(content: &str) -> bool {
    content.contains(UNRELEASED_HEADING)
}

/// check the Added/Changed/Fixed layout and that something is listed
fn validate_unreleased_section(content: &str) -> Option<Issue> {
    match parse_unreleased_section(content) {
        Err(e) => Some(
            Issue::error(IssueType::BadUnreleasedFormat, UNRELEASED_FORMAT_MESSAGE)
                .with_detail(e.to_string()),
        ),
        Ok(section) if !section.has_changes() => Some(Issue::error(
            IssueType::EmptyUnreleased,
            UNRELEASED_EMPTY_MESSAGE,
        )),
        Ok(_) => None,
    }
}

/// apply every structural rule to changelog text
pub fn validate(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for rule in RULES {
        if !rule.passes(content) {
            result.add_violation(rule.issue_type, rule.message);
        }
    }

    if let Some(issue) = validate_unreleased_section(content) {
        result.push_violation(issue);
    }

    result
}

pub fn validate_document(document: &ChangelogDocument) -> ValidationResult {
    validate(document.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "# Change Log\n\n## [Unreleased]\n\n### Added\n- x\n\n### Changed\n\n### Fixed\n\n## [1.0.0] - d\n### Added\n- y\n";

    #[test]
    fn test_valid_changelog_has_no_violations() {
        let result = validate(VALID);
        assert!(result.is_valid(), "{:?}", result.violations);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_content_reports_every_rule() {
        let result = validate("");
        assert_eq!(
            result.violation_messages(),
            vec![
                "Changelog cannot be empty",
                "Changelog must have a \"Change Log\" header",
                "Changelog must contain at least one semantic version header",
                "Changelog must contain an Unreleased section",
                UNRELEASED_FORMAT_MESSAGE,
            ]
        );
    }

    #[test]
    fn test_freeform_unreleased_reports_format_only() {
        let result = validate("# Change Log\n\n## [Unreleased]\n- Invalid format\n");
        assert!(!result.is_valid());
        assert!(result.has_violation(IssueType::BadUnreleasedFormat));
        assert!(!result.has_violation(IssueType::EmptyUnreleased));
        assert!(result.has_violation(IssueType::MissingVersionEntry));
    }

    #[test]
    fn test_all_sections_empty() {
        let content = "# Change Log\n\n## [Unreleased]\n\n### Added\n\n### Changed\n\n### Fixed\n\n## [1.0.0] - 2023-12-20\n- Initial release\n";
        let result = validate(content);
        assert_eq!(result.violation_messages(), vec![UNRELEASED_EMPTY_MESSAGE]);
    }

    #[test]
    fn test_single_non_empty_section_passes() {
        let content = "# Change Log\n\n## [Unreleased]\n\n### Added\n\n### Changed\n\n### Fixed\n- bug\n\n## [0.1.0]\n";
        assert!(validate(content).is_valid());
    }

    #[test]
    fn test_format_violation_carries_detail() {
        let content = "# Change Log\n\n## [Unreleased]\n\n### Added\n- x\n\n### Fixed\n\n## [1.0.0]\n";
        let result = validate(content);
        let issue = &result.violations[0];
        assert_eq!(issue.message, UNRELEASED_FORMAT_MESSAGE);
        assert_eq!(
            issue.detail.as_deref(),
            Some("found '### Fixed' where '### Changed' was expected")
        );
    }

    #[test]
    fn test_title_header_must_be_a_heading_line() {
        assert!(has_title_header("# Change Log\n"));
        assert!(has_title_header("intro\n# Change Log  \n"));
        assert!(!has_title_header("see # Change Log below\n"));
        assert!(!has_title_header("# Change Logs\n"));
    }

    #[test]
    fn test_version_header_pattern() {
        assert!(has_version_header("## [10.20.30] - 2024-01-01"));
        assert!(!has_version_header("## [1.0]"));
        assert!(!has_version_header("## [v1.0.0]"));
        assert!(!has_version_header("## [1.0.0-beta]"));
    }

    #[test]
    fn test_rules_are_in_reporting_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["non-empty", "title-header", "version-entry", "unreleased-marker"]
        );
    }
}
