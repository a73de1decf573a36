use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// scratch git repository driven through the git command line
pub struct TestGitRepo {
    repo_path: PathBuf,
    _temp_dir: Option<TempDir>,
}

impl TestGitRepo {
    /// initialize a new git repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Self {
            repo_path: path.as_ref().to_path_buf(),
            _temp_dir: None,
        };
        repo.configure()?;
        Ok(repo)
    }

    /// initialize a repository in a fresh temporary directory
    pub fn temporary() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let repo = Self {
            repo_path: temp_dir.path().to_path_buf(),
            _temp_dir: Some(temp_dir),
        };
        repo.configure()?;
        Ok(repo)
    }

    fn configure(&self) -> Result<()> {
        self.git(&["init", "--initial-branch=main"])?;
        self.git(&["config", "user.name", "Test User"])?;
        self.git(&["config", "user.email", "test@example.com"])?;
        // signing would need a key in the test environment
        self.git(&["config", "commit.gpgsign", "false"])?;
        Ok(())
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(output)
    }

    /// write a file relative to the repository root
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<PathBuf> {
        let full_path = self.repo_path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;

        Ok(full_path)
    }

    /// stage everything and commit
    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.git(&["add", "."])?;
        self.git(&["commit", "-m", message])?;
        Ok(())
    }

    /// point `refs/remotes/<remote_branch>` at HEAD, standing in for a fetch
    pub fn set_remote_ref(&self, remote_branch: &str) -> Result<()> {
        let ref_name = format!("refs/remotes/{}", remote_branch);
        self.git(&["update-ref", ref_name.as_str(), "HEAD"])?;
        Ok(())
    }

    /// get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    /// get current HEAD commit id
    pub fn head_commit_id(&self) -> Result<String> {
        let output = self.git(&["rev-parse", "HEAD"])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
