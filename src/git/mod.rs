//! Version-control abstraction layer
//!
//! The release gate needs exactly two things from version control: a silent
//! probe telling whether a revision names an existing commit, and the
//! zero-context unified diff of a range restricted to a set of top-level paths.
//!
//! # Implementations
//!
//! - [system::SystemGit]: runs the `git` executable (default backend)
//! - [repository::Git2Repository]: in-process libgit2 via the `git2` crate
//! - [mock::MockRepository]: canned revisions and diff text for tests
//!
//! Checks depend on the [Repository] trait, never on a concrete backend.

pub mod mock;
pub mod repository;
pub mod system;

pub use mock::MockRepository;
pub use repository::Git2Repository;
pub use system::SystemGit;

use std::path::Path;

use crate::config::GitBackend;
use crate::domain::ChangeRange;
use crate::error::Result;

/// Common version-control operations used by the release gate
pub trait Repository {
    /// Whether `rev` resolves to an existing commit.
    ///
    /// Must not print anything; any failure to resolve is reported as `false`.
    fn revision_exists(&self, rev: &str) -> bool;

    /// Zero-context unified diff of `range`, limited to `paths`
    ///
    /// # Returns
    /// * `Ok(String)` - Patch text (`diff --git`, `---`/`+++`, `@@` and `+`/`-` lines)
    /// * `Err` - If either revision is unusable or the backend fails
    fn diff(&self, range: &ChangeRange, paths: &[String]) -> Result<String>;
}

/// Opens the configured backend for the repository at `root`.
///
/// A libgit2 backend that cannot discover a repository degrades to the system
/// backend, whose probes then fail quietly and leave the change range unresolved.
pub fn open_backend(backend: GitBackend, root: &Path) -> Box<dyn Repository> {
    match backend {
        GitBackend::System => Box::new(SystemGit::new(root)),
        GitBackend::Libgit2 => match Git2Repository::open(root) {
            Ok(repo) => Box::new(repo),
            Err(e) => {
                tracing::debug!(error = %e, "libgit2 could not open repository");
                Box::new(SystemGit::new(root))
            }
        },
    }
}
