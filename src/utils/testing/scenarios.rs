// pre-defined changelog scenarios

/// pre-defined changelog contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogScenario {
    /// header, populated unreleased block and one release
    Valid,
    /// only the Added subsection lists anything
    AddedOnly,
    /// unreleased block with all three subsections empty
    EmptyUnreleased,
    /// unreleased block as a bare bullet list
    FreeformUnreleased,
    /// Fixed listed before Changed
    OutOfOrder,
    /// no content at all
    Empty,
}

impl ChangelogScenario {
    pub fn all() -> &'static [Self] {
        &[
            Self::Valid,
            Self::AddedOnly,
            Self::EmptyUnreleased,
            Self::FreeformUnreleased,
            Self::OutOfOrder,
            Self::Empty,
        ]
    }

    pub fn content(self) -> &'static str {
        match self {
            ChangelogScenario::Valid => VALID,
            ChangelogScenario::AddedOnly => ADDED_ONLY,
            ChangelogScenario::EmptyUnreleased => EMPTY_UNRELEASED,
            ChangelogScenario::FreeformUnreleased => FREEFORM_UNRELEASED,
            ChangelogScenario::OutOfOrder => OUT_OF_ORDER,
            ChangelogScenario::Empty => "",
        }
    }

    /// whether the structural rules accept this content
    pub fn is_valid(self) -> bool {
        matches!(self, ChangelogScenario::Valid | ChangelogScenario::AddedOnly)
    }
}

const VALID: &str = "# Change Log

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](http://keepachangelog.com/)
and this project adheres to [Semantic Versioning](http://semver.org/).

## [Unreleased]

### Added
- New feature pending

### Changed
- Updated documentation

### Fixed
- Fixed a bug

## [1.0.0] - 2023-12-20
### Added
- Initial release
";

const ADDED_ONLY: &str = "# Change Log\n\n## [Unreleased]\n\n### Added\n- x\n\n### Changed\n\n### Fixed\n\n## [1.0.0] - d\n### Added\n- y\n";

const EMPTY_UNRELEASED: &str = "# Change Log

## [Unreleased]

### Added

### Changed

### Fixed

## [1.0.0] - 2023-12-20
- Initial release
";

const FREEFORM_UNRELEASED: &str = "# Change Log\n\n## [Unreleased]\n- Invalid format\n";

const OUT_OF_ORDER: &str = "# Change Log

## [Unreleased]

### Added
- New feature

### Fixed
- A bug

### Changed
- Something

## [0.2.0] - 2024-03-01
";
