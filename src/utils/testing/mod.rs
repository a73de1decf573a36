// testing utilities for changelogs and git repositories

pub mod git_utils;
pub mod scenarios;

pub use git_utils::TestGitRepo;
pub use scenarios::ChangelogScenario;
