pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, ChangelogDocument, Release, SectionError, UnreleasedSection,
    ValidationResult, parse_unreleased_section, read_changelog, validate, validate_document,
};
pub use utils::changelog_checker::{ChangelogChecker, ChangelogReport};
pub use utils::config::ValidatorConfig;
pub use utils::git_ops::{GitOps, UpdateCheck, VersionControl, check_updated};
pub use utils::reporting::{ReportingConfig, StepSummaryFile, SummarySink};
pub use utils::severity::{Issue, IssueSeverity, IssueType};
