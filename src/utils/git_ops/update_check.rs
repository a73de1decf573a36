// changelog update check against a base reference

use super::types::{UpdateCheck, VersionControl};
use crate::utils::changelog::ValidationResult;
use crate::utils::severity::IssueType;
use std::path::Path;

pub const NOT_UPDATED_MESSAGE: &str = "Changelog must be updated in this PR";
pub const NOT_A_REPOSITORY_WARNING: &str = "Not a git repository, skipping update check";

/// compare `path` with `base_ref`; infrastructure failures become a skip
pub fn check_updated(vcs: &dyn VersionControl, path: &Path, base_ref: &str) -> UpdateCheck {
    match vcs.is_repository() {
        Ok(true) => {}
        Ok(false) => {
            return UpdateCheck::Skipped {
                reason: NOT_A_REPOSITORY_WARNING.to_string(),
            };
        }
        Err(e) => {
            return UpdateCheck::Skipped {
                reason: format!("Could not check changelog updates: {}", e),
            };
        }
    }

    match vcs.diff_against(path, base_ref) {
        Ok(diff) if diff.trim().is_empty() => UpdateCheck::NotUpdated,
        Ok(_) => UpdateCheck::Updated,
        Err(e) => UpdateCheck::Skipped {
            reason: format!("Could not check changelog updates: {}", e),
        },
    }
}

impl UpdateCheck {
    /// record the outcome as a violation or a warning
    pub fn apply(&self, result: &mut ValidationResult) {
        match self {
            UpdateCheck::Updated => {}
            UpdateCheck::NotUpdated => {
                result.add_violation(IssueType::ChangelogNotUpdated, NOT_UPDATED_MESSAGE);
            }
            UpdateCheck::Skipped { reason } => {
                result.add_warning(IssueType::UpdateCheckSkipped, reason.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use std::cell::Cell;

    struct FakeVcs {
        tracked: bool,
        diff: std::result::Result<&'static str, &'static str>,
        diff_calls: Cell<usize>,
    }

    impl FakeVcs {
        fn new(tracked: bool, diff: std::result::Result<&'static str, &'static str>) -> Self {
            Self {
                tracked,
                diff,
                diff_calls: Cell::new(0),
            }
        }
    }

    impl VersionControl for FakeVcs {
        fn is_repository(&self) -> Result<bool> {
            Ok(self.tracked)
        }

        fn diff_against(&self, _path: &Path, _base_ref: &str) -> Result<String> {
            self.diff_calls.set(self.diff_calls.get() + 1);
            self.diff.map(str::to_string).map_err(|reason| Error::DiffError {
                reason: reason.to_string(),
            })
        }
    }

    #[test]
    fn test_not_a_repository_skips_without_diff() {
        let vcs = FakeVcs::new(false, Ok(""));
        let check = check_updated(&vcs, Path::new("CHANGELOG.md"), "origin/main");

        assert_eq!(
            check,
            UpdateCheck::Skipped {
                reason: NOT_A_REPOSITORY_WARNING.to_string()
            }
        );
        assert_eq!(vcs.diff_calls.get(), 0);

        let mut result = ValidationResult::new();
        check.apply(&mut result);
        assert!(result.is_valid());
        assert_eq!(result.warning_messages(), vec![NOT_A_REPOSITORY_WARNING]);
    }

    #[test]
    fn test_empty_diff_is_violation() {
        let vcs = FakeVcs::new(true, Ok(""));
        let check = check_updated(&vcs, Path::new("CHANGELOG.md"), "origin/main");
        assert_eq!(check, UpdateCheck::NotUpdated);

        let mut result = ValidationResult::new();
        check.apply(&mut result);
        assert_eq!(result.violation_messages(), vec![NOT_UPDATED_MESSAGE]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_non_empty_diff_passes() {
        let vcs = FakeVcs::new(true, Ok("+- new entry\n"));
        let check = check_updated(&vcs, Path::new("CHANGELOG.md"), "origin/main");
        assert_eq!(check, UpdateCheck::Updated);

        let mut result = ValidationResult::new();
        check.apply(&mut result);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_diff_failure_becomes_warning() {
        let vcs = FakeVcs::new(true, Err("unknown revision 'origin/main'"));
        let check = check_updated(&vcs, Path::new("CHANGELOG.md"), "origin/main");
        assert!(check.is_skipped());

        let mut result = ValidationResult::new();
        check.apply(&mut result);
        assert!(result.is_valid());
        assert_eq!(
            result.warning_messages(),
            vec!["Could not check changelog updates: diff error: unknown revision 'origin/main'"]
        );
    }
}
