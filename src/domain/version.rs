use std::fmt;

/// Package version as declared in the manifest.
///
/// The raw string is the join key for every linkage check, so it is kept
/// verbatim. Semantic-version interpretation is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    raw: String,
}

impl Version {
    /// Create a version from the manifest value
    pub fn new(raw: impl Into<String>) -> Self {
        Version { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parse the value as a semantic version, if it is one
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.raw).ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
