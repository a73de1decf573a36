// changelog configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";
pub const DEFAULT_BASE_REF: &str = "origin/main";

/// configuration for changelog validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// path of the changelog file (default: "CHANGELOG.md")
    pub path: PathBuf,

    /// check if changelog file differs from `base_ref`
    pub check_updated: bool,

    /// reference the update check diffs against (default: "origin/main")
    pub base_ref: String,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn check_updated(mut self, check: bool) -> Self {
        self.check_updated = check;
        self
    }

    pub fn base_ref(mut self, base_ref: impl Into<String>) -> Self {
        self.base_ref = base_ref.into();
        self
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHANGELOG_PATH),
            check_updated: false,
            base_ref: DEFAULT_BASE_REF.to_string(),
        }
    }
}
