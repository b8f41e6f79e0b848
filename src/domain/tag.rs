use std::fmt;

use crate::domain::Version;

/// Release tag: the `v`-prefixed version used as a cross-file join key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
}

impl ReleaseTag {
    /// Derive the tag for a manifest version (e.g., "1.2.3" -> "v1.2.3")
    pub fn from_version(version: &Version) -> Self {
        ReleaseTag {
            name: format!("v{}", version.as_str()),
        }
    }

    /// Heading the changelog must carry for this release
    pub fn changelog_heading(&self) -> String {
        format!("## {}", self.name)
    }

    /// Per-version release-notes file name
    pub fn release_notes_filename(&self) -> String {
        format!("RELEASE_NOTES_{}.md", self.name)
    }

    /// Markdown link the release-notes index must contain
    pub fn index_link(&self) -> String {
        format!("[{}]({})", self.name, self.release_notes_filename())
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
