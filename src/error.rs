use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    ChangelogNotFound {
        path: PathBuf,
    },
    NotAFile {
        path: PathBuf,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    GitError(Box<dyn std::error::Error + Send + Sync>),
    IoError(std::io::Error),
    DiffError {
        reason: String,
    },
    SummaryWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ChangelogNotFound { path } => {
                write!(f, "{} file not found", path.display())
            }
            Error::NotAFile { path } => {
                write!(f, "{} is not a file", path.display())
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::GitError(err) => {
                write!(f, "git error: {}", err)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::DiffError { reason } => {
                write!(f, "diff error: {}", reason)
            }
            Error::SummaryWriteError { path, source } => {
                write!(
                    f,
                    "failed to write step summary: {} ({})",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::GitError(err) => Some(err.as_ref()),
            Error::IoError(err) => Some(err),
            Error::SummaryWriteError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl Error {
    /// true when the changelog content could not be obtained at all
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(
            self,
            Error::ChangelogNotFound { .. } | Error::NotAFile { .. } | Error::FileReadError { .. }
        )
    }
}
