use std::fmt;

/// Non-fatal conditions that stop the schema gate from inspecting history.
/// These are reported as informational lines and never fail the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipNotice {
    /// No change range could be resolved (first commit, shallow clone, no git)
    NoChangeRange,
    /// The diff of a resolved range could not be produced
    DiffUnavailable { range: String, reason: String },
}

impl fmt::Display for SkipNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipNotice::NoChangeRange => {
                write!(f, "no diff range available; skipping schema-change gate")
            }
            SkipNotice::DiffUnavailable { range, reason } => {
                write!(
                    f,
                    "failed to inspect git diff for {} ({}); skipping schema-change gate",
                    range, reason
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_change_range_display() {
        let msg = SkipNotice::NoChangeRange.to_string();
        assert!(msg.contains("no diff range available"));
        assert!(msg.contains("skipping schema-change gate"));
    }

    #[test]
    fn test_diff_unavailable_display() {
        let notice = SkipNotice::DiffUnavailable {
            range: "HEAD~1..HEAD".to_string(),
            reason: "fatal: bad revision".to_string(),
        };
        let msg = notice.to_string();
        assert!(msg.contains("HEAD~1..HEAD"));
        assert!(msg.contains("fatal: bad revision"));
    }
}
