use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// version control queries the update check depends on
pub trait VersionControl {
    /// whether the working directory is tracked by version control
    fn is_repository(&self) -> Result<bool>;

    /// textual diff of `path` against `base_ref`, empty when unchanged
    fn diff_against(&self, path: &Path, base_ref: &str) -> Result<String>;
}

/// outcome of comparing the changelog with the base reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateCheck {
    Updated,
    NotUpdated,
    Skipped { reason: String },
}

impl UpdateCheck {
    pub fn is_skipped(&self) -> bool {
        matches!(self, UpdateCheck::Skipped { .. })
    }
}
