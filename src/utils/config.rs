use super::changelog::ChangelogConfig;
use super::reporting::ReportingConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "changelog-validator.toml";

/// main configuration for changelog-validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// CI summary reporting
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl ValidatorConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// load `changelog-validator.toml` from `dir`, defaults when absent
    ///
    /// a config file that exists but does not parse is an error
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match Self::find_config_file(dir) {
            Some(config_path) => Self::load_from_file(config_path),
            None => Ok(Self::default()),
        }
    }

    /// find configuration file in a directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ValidatorConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert!(config.reporting.step_summary);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[changelog]\ncheck_updated = true\nbase_ref = \"origin/develop\"\n",
        )
        .unwrap();

        let config = ValidatorConfig::load(temp_dir.path()).unwrap();
        assert!(config.changelog.check_updated);
        assert_eq!(config.changelog.base_ref, "origin/develop");
        assert_eq!(config.changelog.path, PathBuf::from("CHANGELOG.md"));
        assert!(config.reporting.step_summary);
    }

    #[test]
    fn test_load_reporting_section() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[reporting]\nstep_summary = false\n",
        )
        .unwrap();

        let config = ValidatorConfig::load(temp_dir.path()).unwrap();
        assert!(!config.reporting.step_summary);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[changelog]\ncheck_updated = \"yes please\"\n",
        )
        .unwrap();

        let err = ValidatorConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::TomlParseError { .. }));
    }
}
