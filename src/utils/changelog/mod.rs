// changelog validation module

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use parser::{SectionError, parse_releases, parse_unreleased_section, read_changelog};
pub use types::{ChangelogDocument, Release, UnreleasedSection, ValidationResult};
pub use validator::{RULES, ValidationRule, validate, validate_document};
