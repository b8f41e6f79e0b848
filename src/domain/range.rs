use std::fmt;

/// Span of committed history to diff, from `base` (exclusive) to `head`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRange {
    pub base: String,
    pub head: String,
}

impl ChangeRange {
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        ChangeRange {
            base: base.into(),
            head: head.into(),
        }
    }
}

impl fmt::Display for ChangeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.base, self.head)
    }
}
