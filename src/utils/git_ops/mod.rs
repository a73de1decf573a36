pub mod repository;
pub mod types;
pub mod update_check;

pub use repository::GitOps;
pub use types::*;
pub use update_check::{NOT_A_REPOSITORY_WARNING, NOT_UPDATED_MESSAGE, check_updated};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_git_repo(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let _repo = gix::init(dir)?;
        fs::write(dir.join("CHANGELOG.md"), "# Change Log\n")?;
        Ok(())
    }

    #[test]
    fn test_is_repository_with_git_repo() {
        let temp_dir = TempDir::new().unwrap();
        create_git_repo(temp_dir.path()).unwrap();

        assert!(GitOps::is_repository(temp_dir.path()).unwrap());
        assert!(GitOps::is_repository(temp_dir.path().join("CHANGELOG.md")).unwrap());
    }

    #[test]
    fn test_is_repository_with_non_repo() {
        let temp_dir = TempDir::new().unwrap();

        let result = GitOps::is_repository(temp_dir.path());
        assert!(result.is_ok());
        assert!(!result.unwrap());
    }

    #[test]
    fn test_version_control_trait_uses_work_dir() {
        let temp_dir = TempDir::new().unwrap();
        let git = GitOps::new(temp_dir.path());
        assert!(!VersionControl::is_repository(&git).unwrap());

        create_git_repo(temp_dir.path()).unwrap();
        assert!(VersionControl::is_repository(&git).unwrap());
    }

    #[test]
    fn test_update_check_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        let git = GitOps::new(temp_dir.path());

        let check = check_updated(&git, Path::new("CHANGELOG.md"), "origin/main");
        assert_eq!(
            check,
            UpdateCheck::Skipped {
                reason: NOT_A_REPOSITORY_WARNING.to_string()
            }
        );
    }
}
