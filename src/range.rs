//! Change-range resolver.
//!
//! Picks the span of history to inspect for schema changes. Pipeline hints
//! come first; a local `HEAD~1..HEAD` fallback covers manual runs. Not finding
//! a range is a normal outcome, never an error.

use crate::domain::ChangeRange;
use crate::git::Repository;

pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
pub const BASE_SHA_VAR: &str = "GITHUB_BASE_SHA";
pub const HEAD_SHA_VAR: &str = "GITHUB_SHA";
pub const BEFORE_SHA_VAR: &str = "GITHUB_EVENT_BEFORE";

/// Snapshot of the pipeline environment variables the resolver reads.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    pub event_name: Option<String>,
    pub base_sha: Option<String>,
    pub head_sha: Option<String>,
    pub before_sha: Option<String>,
}

impl CiEnvironment {
    /// Capture the current process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a snapshot from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        CiEnvironment {
            event_name: get(EVENT_NAME_VAR),
            base_sha: get(BASE_SHA_VAR),
            head_sha: get(HEAD_SHA_VAR),
            before_sha: get(BEFORE_SHA_VAR),
        }
    }

    fn is_event(&self, name: &str) -> bool {
        self.event_name.as_deref() == Some(name)
    }
}

/// A candidate way of finding a range; `None` passes to the next one
pub type RangeStrategy = fn(&CiEnvironment, &dyn Repository) -> Option<ChangeRange>;

/// Resolution order. The first strategy that yields a range wins.
pub const STRATEGIES: &[(&str, RangeStrategy)] = &[
    ("pull_request", pull_request_range),
    ("push", push_range),
    ("parent_of_head", parent_of_head_range),
];

/// Resolve the change range to inspect, or `None` when history is unavailable
pub fn resolve_change_range(env: &CiEnvironment, repo: &dyn Repository) -> Option<ChangeRange> {
    for (name, strategy) in STRATEGIES {
        if let Some(range) = strategy(env, repo) {
            tracing::debug!(strategy = *name, range = %range, "resolved change range");
            return Some(range);
        }
    }
    tracing::debug!("no change range resolvable");
    None
}

/// Pull-request event: diff the base revision against the head revision
pub fn pull_request_range(env: &CiEnvironment, repo: &dyn Repository) -> Option<ChangeRange> {
    if !env.is_event("pull_request") {
        return None;
    }
    let base = env.base_sha.as_deref()?;
    let head = env.head_sha.as_deref()?;
    verified_range(repo, base, head)
}

/// Push event: diff the pre-push revision against the pushed head.
///
/// A branch-creation push reports an all-zero before-revision; there is no
/// prior history to compare against, so it never yields a range.
pub fn push_range(env: &CiEnvironment, repo: &dyn Repository) -> Option<ChangeRange> {
    if !env.is_event("push") {
        return None;
    }
    let before = env.before_sha.as_deref()?;
    let head = env.head_sha.as_deref()?;
    if is_null_revision(before) {
        return None;
    }
    verified_range(repo, before, head)
}

/// Local fallback: the last commit
pub fn parent_of_head_range(_env: &CiEnvironment, repo: &dyn Repository) -> Option<ChangeRange> {
    verified_range(repo, "HEAD~1", "HEAD")
}

fn verified_range(repo: &dyn Repository, base: &str, head: &str) -> Option<ChangeRange> {
    if repo.revision_exists(base) && repo.revision_exists(head) {
        Some(ChangeRange::new(base, head))
    } else {
        None
    }
}

/// Whether `rev` is the all-zero object id used for "no previous commit"
pub fn is_null_revision(rev: &str) -> bool {
    !rev.is_empty() && rev.chars().all(|c| c == '0')
}
