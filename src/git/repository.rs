use git2::{DiffFormat, DiffOptions, Repository as Git2Repo, Tree};
use std::path::Path;

use crate::domain::ChangeRange;
use crate::error::{GateError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn commit_tree(&self, rev: &str) -> Result<Tree<'_>> {
        let commit = self
            .repo
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| GateError::git_command(format!("cannot resolve '{}': {}", rev, e)))?;

        Ok(commit.tree()?)
    }
}

impl super::Repository for Git2Repository {
    fn revision_exists(&self, rev: &str) -> bool {
        self.repo
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .is_ok()
    }

    fn diff(&self, range: &ChangeRange, paths: &[String]) -> Result<String> {
        let base = self.commit_tree(&range.base)?;
        let head = self.commit_tree(&range.head)?;

        let mut options = DiffOptions::new();
        options.context_lines(0);
        for path in paths {
            options.pathspec(path);
        }

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&base), Some(&head), Some(&mut options))?;

        // Content lines carry their origin marker separately; file and hunk
        // headers arrive fully formatted.
        let mut text = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            let origin = line.origin();
            if matches!(origin, '+' | '-' | ' ') {
                text.push(origin);
            }
            text.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;

        Ok(text)
    }
}
