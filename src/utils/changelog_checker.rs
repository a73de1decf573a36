use crate::error::Result;
use crate::utils::changelog::{
    ChangelogConfig, ChangelogDocument, Release, ValidationResult, read_changelog,
    validate_document,
};
use crate::utils::git_ops::{GitOps, UpdateCheck, VersionControl, check_updated};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// everything one validation run found out about a changelog
#[derive(Debug, Clone)]
pub struct ChangelogReport {
    pub path: PathBuf,
    pub result: ValidationResult,
    pub update_check: Option<UpdateCheck>,
    pub releases: Vec<Release>,
}

impl ChangelogReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// print the outcome: success on stdout, problems on stderr
    pub fn display_human(&self, verbose: bool) {
        for warning in &self.result.warnings {
            eprintln!("{}", format!("⚠️ {}", warning.message).yellow());
        }

        if self.is_valid() {
            println!("{}", "✅ Changelog validation passed".green());
        } else {
            eprintln!("{}", "❌ Changelog validation failed:".red());
            for violation in &self.result.violations {
                eprintln!("{}", format!("  - {}", violation.message).red());
                if verbose && let Some(detail) = &violation.detail {
                    eprintln!("      {}", detail);
                }
            }
        }

        if verbose {
            self.display_releases();
        }
    }

    fn display_releases(&self) {
        if self.releases.is_empty() {
            println!("no released versions found in {}", self.path.display());
            return;
        }

        println!("released versions in {}:", self.path.display());
        for release in &self.releases {
            match release.date {
                Some(date) => println!(
                    "  {:<12} {}  (line {})",
                    release.version, date, release.line_number
                ),
                None => println!(
                    "  {:<12} {:<10}  (line {})",
                    release.version, "-", release.line_number
                ),
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path,
            "valid": self.is_valid(),
            "violations": self.result.violations,
            "warnings": self.result.warnings,
            "update_check": self.update_check,
            "releases": self.releases,
        })
    }
}

/// runs the structural rules and, when configured, the update check
pub struct ChangelogChecker {
    config: ChangelogConfig,
    vcs: Box<dyn VersionControl>,
}

impl ChangelogChecker {
    /// checker using git from the current directory for update checks
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            config,
            vcs: Box::new(GitOps::new(".")),
        }
    }

    pub fn with_vcs(mut self, vcs: impl VersionControl + 'static) -> Self {
        self.vcs = Box::new(vcs);
        self
    }

    pub fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    /// read the configured changelog and validate it
    ///
    /// fails only when the file cannot be obtained; rule failures and
    /// update-check problems end up in the report
    pub fn check(&self) -> Result<ChangelogReport> {
        let document = read_changelog(&self.config.path)?;
        Ok(self.check_document(&document))
    }

    pub fn check_document(&self, document: &ChangelogDocument) -> ChangelogReport {
        let mut result = validate_document(document);

        let update_check = if self.config.check_updated {
            let check = self.run_update_check(document.path());
            check.apply(&mut result);
            Some(check)
        } else {
            None
        };

        ChangelogReport {
            path: document.path().to_path_buf(),
            result,
            update_check,
            releases: document.releases(),
        }
    }

    fn run_update_check(&self, path: &Path) -> UpdateCheck {
        check_updated(self.vcs.as_ref(), path, &self.config.base_ref)
    }
}
