//! Schema-change detection and the Schema Notes rule.
//!
//! A change range is schema-affecting when its diff adds or removes a line
//! mentioning a schema marker. Such a release must document compatibility
//! impact under a `## Schema Notes` / `### Schema Notes` heading.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::{LinkageArtifacts, ReleaseTag};
use crate::error::{GateError, Result};
use crate::linkage::read_artifact;

/// Constant names that always count as schema markers (case-sensitive)
pub const MARKER_LITERALS: &[&str] = &["SCHEMA_VERSION", "schema_version"];

/// Structured identifier pattern that always counts as a schema marker
pub const MARKER_IDENTIFIER_PATTERN: &str = r"openagent\.[\w.-]+\.v\d+";

fn schema_notes_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)^[ \t]{0,3}(##|###)\s+Schema Notes\b")
            .expect("schema notes pattern is valid")
    })
}

/// A changed line that mentions a schema marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSignal {
    /// 1-based line number within the diff text
    pub line_number: usize,
    pub line: String,
}

/// Matches schema markers on added/removed diff lines.
///
/// The built-in markers are always present; configured patterns only add to them.
#[derive(Debug, Clone)]
pub struct SchemaDetector {
    patterns: Vec<Regex>,
}

impl SchemaDetector {
    /// Detector with the built-in marker set plus `extra_patterns`
    ///
    /// # Errors
    /// * `GateError::Config` - if an extra pattern is not a valid regex
    pub fn new(extra_patterns: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(1 + extra_patterns.len());
        patterns.push(
            Regex::new(MARKER_IDENTIFIER_PATTERN)
                .map_err(|e| GateError::config(format!("invalid marker pattern: {}", e)))?,
        );
        for pattern in extra_patterns {
            let re = Regex::new(pattern).map_err(|e| {
                GateError::config(format!("invalid schema pattern '{}': {}", pattern, e))
            })?;
            patterns.push(re);
        }
        Ok(SchemaDetector { patterns })
    }

    fn is_marker(&self, content: &str) -> bool {
        MARKER_LITERALS.iter().any(|literal| content.contains(literal))
            || self.patterns.iter().any(|re| re.is_match(content))
    }

    /// First added or removed line in `diff` that carries a schema marker.
    ///
    /// `+++`/`---` file headers are skipped. Inside a hunk every `+`/`-` line is
    /// content, so a removed line whose text itself starts with `--` still counts.
    pub fn first_signal(&self, diff: &str) -> Option<SchemaSignal> {
        let mut in_hunk = false;

        for (idx, line) in diff.lines().enumerate() {
            if line.starts_with("diff ") {
                in_hunk = false;
                continue;
            }
            if line.starts_with("@@") {
                in_hunk = true;
                continue;
            }

            let is_header = line.starts_with("+++") || line.starts_with("---");
            if is_header && !in_hunk {
                continue;
            }

            if (line.starts_with('+') || line.starts_with('-')) && self.is_marker(&line[1..]) {
                return Some(SchemaSignal {
                    line_number: idx + 1,
                    line: line.to_string(),
                });
            }
        }

        None
    }

    /// Whether `diff` touches any schema marker
    pub fn is_schema_affecting(&self, diff: &str) -> bool {
        self.first_signal(diff).is_some()
    }
}

impl Default for SchemaDetector {
    fn default() -> Self {
        SchemaDetector {
            patterns: vec![Regex::new(MARKER_IDENTIFIER_PATTERN).expect("marker pattern is valid")],
        }
    }
}

/// Whether markdown `text` has a `Schema Notes` heading (level 2 or 3)
pub fn has_schema_notes(text: &str) -> bool {
    schema_notes_heading().is_match(text)
}

/// Requires a Schema Notes section in the changelog or the release notes.
///
/// # Returns
/// * `Ok(path)` - Relative path of the first file carrying the section
/// * `Err(GateError::Policy)` - If neither file has it
pub fn require_schema_notes(tag: &ReleaseTag, artifacts: &LinkageArtifacts) -> Result<String> {
    for location in [&artifacts.changelog, &artifacts.release_notes] {
        let text = read_artifact(artifacts, location)?;
        if has_schema_notes(&text) {
            return Ok(location.clone());
        }
    }

    Err(GateError::policy(format!(
        "schema-like constants changed, but no `Schema Notes` section was found in `{}` or `{}` for `{}`. \
         Add a `### Schema Notes` (or `## Schema Notes`) section describing compatibility impact.",
        artifacts.changelog, artifacts.release_notes, tag
    )))
}
