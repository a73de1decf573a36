// changelog parser

use super::types::{ChangelogDocument, Release, UnreleasedSection};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use semver::Version;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const UNRELEASED_HEADING: &str = "## [Unreleased]";

const SUBSECTIONS: [&str; 3] = ["Added", "Changed", "Fixed"];

/// why the unreleased block does not have the Added, Changed, Fixed layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    MissingUnreleasedHeading,
    ContentBeforeAdded { line_number: usize },
    MissingSubsection { expected: &'static str },
    OutOfOrder { found: String, expected: &'static str },
    UnexpectedSubsection { found: String },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::MissingUnreleasedHeading => {
                write!(f, "no '{}' heading found", UNRELEASED_HEADING)
            }
            SectionError::ContentBeforeAdded { line_number } => {
                write!(
                    f,
                    "line {}: content before '### Added' subsection",
                    line_number
                )
            }
            SectionError::MissingSubsection { expected } => {
                write!(f, "missing '### {}' subsection", expected)
            }
            SectionError::OutOfOrder { found, expected } => {
                write!(
                    f,
                    "found '### {}' where '### {}' was expected",
                    found, expected
                )
            }
            SectionError::UnexpectedSubsection { found } => {
                write!(f, "unexpected subsection '### {}'", found)
            }
        }
    }
}

/// read changelog content, distinguishing missing files from other failures
pub fn read_changelog<P: AsRef<Path>>(path: P) -> Result<ChangelogDocument> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ChangelogNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    // invalid utf-8 is replaced, not rejected
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok(ChangelogDocument::new(path, content))
}

/// markdown ATX heading level and its text, if the line is a heading
pub(crate) fn heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 {
        return None;
    }

    let rest = &trimmed[level..];
    if rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t') {
        Some((level, rest.trim()))
    } else {
        None
    }
}

/// lines of the unreleased block (after its heading, before the next level-2
/// heading), each paired with its 1-based line number
pub fn locate_unreleased_block(content: &str) -> Option<Vec<(usize, &str)>> {
    let mut lines = content.lines().enumerate();

    lines.find(|(_, line)| line.trim_start().starts_with(UNRELEASED_HEADING))?;

    let block = lines
        .take_while(|(_, line)| !matches!(heading(line), Some((level, _)) if level <= 2))
        .map(|(index, line)| (index + 1, line))
        .collect();

    Some(block)
}

/// walk the unreleased block expecting Added, Changed and Fixed in order
pub fn parse_unreleased_section(
    content: &str,
) -> std::result::Result<UnreleasedSection, SectionError> {
    let block =
        locate_unreleased_block(content).ok_or(SectionError::MissingUnreleasedHeading)?;

    let mut bodies: [String; 3] = Default::default();
    let mut current: Option<usize> = None;
    let mut next = 0;

    for (line_number, line) in block {
        if let Some((3, name)) = heading(line) {
            if next < SUBSECTIONS.len() && name == SUBSECTIONS[next] {
                current = Some(next);
                next += 1;
                continue;
            }

            return Err(match SUBSECTIONS.get(next) {
                Some(expected) if SUBSECTIONS.contains(&name) => SectionError::OutOfOrder {
                    found: name.to_string(),
                    expected: *expected,
                },
                _ => SectionError::UnexpectedSubsection {
                    found: name.to_string(),
                },
            });
        }

        match current {
            Some(index) => {
                bodies[index].push_str(line);
                bodies[index].push('\n');
            }
            None if !line.trim().is_empty() => {
                return Err(SectionError::ContentBeforeAdded { line_number });
            }
            None => {}
        }
    }

    if let Some(expected) = SUBSECTIONS.get(next) {
        return Err(SectionError::MissingSubsection {
            expected: *expected,
        });
    }

    let [added, changed, fixed] = bodies;
    Ok(UnreleasedSection {
        added,
        changed,
        fixed,
    })
}

fn parse_release_heading(text: &str, line_number: usize) -> Option<Release> {
    let inside = text.strip_prefix('[')?;
    let (version_str, rest) = inside.split_once(']')?;
    let version = Version::parse(version_str.trim().trim_start_matches('v')).ok()?;

    let date = rest
        .trim()
        .strip_prefix('-')
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok());

    Some(Release::new(version, date, line_number))
}

/// collect `## [x.y.z]` release headings in file order
pub fn parse_releases(content: &str) -> Vec<Release> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match heading(line) {
            Some((2, text)) => parse_release_heading(text, index + 1),
            _ => None,
        })
        .collect()
}
