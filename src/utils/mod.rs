pub mod changelog;
pub mod changelog_checker;
pub mod config;
pub mod git_ops;
pub mod reporting;
pub mod severity;

pub mod testing;
