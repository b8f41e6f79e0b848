use std::collections::HashSet;

use crate::domain::ChangeRange;
use crate::error::{GateError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    revisions: HashSet<String>,
    diff_text: Option<String>,
    diff_error: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a revision as resolvable
    pub fn add_revision(&mut self, rev: impl Into<String>) {
        self.revisions.insert(rev.into());
    }

    /// Builder form of [`MockRepository::add_revision`]
    pub fn with_revisions<I, S>(mut self, revs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for rev in revs {
            self.add_revision(rev);
        }
        self
    }

    /// Diff text returned for any range whose endpoints resolve
    pub fn with_diff(mut self, text: impl Into<String>) -> Self {
        self.diff_text = Some(text.into());
        self
    }

    /// Make every diff call fail with `message`
    pub fn with_diff_error(mut self, message: impl Into<String>) -> Self {
        self.diff_error = Some(message.into());
        self
    }
}

impl Repository for MockRepository {
    fn revision_exists(&self, rev: &str) -> bool {
        self.revisions.contains(rev)
    }

    fn diff(&self, range: &ChangeRange, _paths: &[String]) -> Result<String> {
        if let Some(message) = &self.diff_error {
            return Err(GateError::git_command(message.clone()));
        }
        for rev in [&range.base, &range.head] {
            if !self.revision_exists(rev) {
                return Err(GateError::git_command(format!("bad revision '{}'", rev)));
            }
        }
        Ok(self.diff_text.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_revisions() {
        let repo = MockRepository::new().with_revisions(["HEAD", "HEAD~1"]);
        assert!(repo.revision_exists("HEAD"));
        assert!(repo.revision_exists("HEAD~1"));
        assert!(!repo.revision_exists("abc123"));
    }

    #[test]
    fn test_mock_repository_diff() {
        let repo = MockRepository::new()
            .with_revisions(["HEAD", "HEAD~1"])
            .with_diff("+x\n");
        let range = ChangeRange::new("HEAD~1", "HEAD");
        assert_eq!(repo.diff(&range, &[]).unwrap(), "+x\n");

        let unknown = ChangeRange::new("abc", "HEAD");
        assert!(repo.diff(&unknown, &[]).is_err());
    }

    #[test]
    fn test_mock_repository_diff_error() {
        let repo = MockRepository::new()
            .with_revisions(["HEAD", "HEAD~1"])
            .with_diff_error("shallow clone");
        let err = repo
            .diff(&ChangeRange::new("HEAD~1", "HEAD"), &[])
            .unwrap_err();
        assert!(err.to_string().contains("shallow clone"));
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(!repo.revision_exists("HEAD"));
    }
}
