use std::fmt;
use thiserror::Error;

/// Unified error type for release-readiness checks
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Linkage error: {0}")]
    Linkage(#[from] LinkageViolation),

    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-readiness
pub type Result<T> = std::result::Result<T, GateError>;

impl GateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GateError::Config(msg.into())
    }

    /// Create a policy error with context
    pub fn policy(msg: impl Into<String>) -> Self {
        GateError::Policy(msg.into())
    }

    /// Create a git command error with context
    pub fn git_command(msg: impl Into<String>) -> Self {
        GateError::GitCommand(msg.into())
    }

    /// Whether this error came from the version-control backend.
    ///
    /// Backend failures never fail the gate; callers downgrade them to a skip.
    pub fn is_vcs_failure(&self) -> bool {
        matches!(self, GateError::Git(_) | GateError::GitCommand(_))
    }
}

/// A broken cross-reference between the manifest version and the release docs.
///
/// Paths are kept relative to the repository root so messages read the same
/// on every machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkageViolation {
    /// A file the check needs to read is absent
    MissingFile { path: String },
    /// The changelog has no `## <tag>` heading
    MissingChangelogHeading { changelog: String, tag: String },
    /// The release-notes index has no `[<tag>](RELEASE_NOTES_<tag>.md)` link
    MissingIndexLink { index: String, link: String },
    /// The per-version release-notes file does not exist
    MissingReleaseNotes { path: String },
}

impl fmt::Display for LinkageViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkageViolation::MissingFile { path } => {
                write!(f, "missing required file: `{}`", path)
            }
            LinkageViolation::MissingChangelogHeading { changelog, tag } => {
                write!(f, "`{}` is missing a release heading for `{}`", changelog, tag)
            }
            LinkageViolation::MissingIndexLink { index, link } => {
                write!(f, "`{}` is missing the current version link `{}`", index, link)
            }
            LinkageViolation::MissingReleaseNotes { path } => {
                write!(f, "missing versioned release notes file: `{}`", path)
            }
        }
    }
}

impl std::error::Error for LinkageViolation {}
