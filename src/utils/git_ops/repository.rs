use super::types::VersionControl;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// git access rooted at a working directory
#[derive(Debug, Clone)]
pub struct GitOps {
    work_dir: PathBuf,
}

impl GitOps {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// detect if the given path is inside a repository
    pub fn is_repository<P: AsRef<Path>>(path: P) -> Result<bool> {
        let path = path.as_ref();

        let check_path = if path.is_file() {
            match path.parent() {
                Some(parent) => parent,
                None => return Ok(false),
            }
        } else {
            path
        };

        match gix::discover(check_path) {
            Ok(_) => Ok(true),
            Err(_) => Ok(false), // any error means it's not a repository
        }
    }

    /// run `git diff <base_ref> -- <path>` from the working directory
    pub fn diff_file(&self, path: &Path, base_ref: &str) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.work_dir)
            .arg("diff")
            .arg("--no-color")
            .arg(base_ref)
            .arg("--")
            .arg(path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("git diff exited with {}", output.status),
                message => message.to_string(),
            };
            return Err(Error::DiffError { reason });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitOps {
    fn is_repository(&self) -> Result<bool> {
        Self::is_repository(&self.work_dir)
    }

    fn diff_against(&self, path: &Path, base_ref: &str) -> Result<String> {
        self.diff_file(path, base_ref)
    }
}
