//! Version reader: pulls the package version out of the manifest.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use crate::domain::Version;
use crate::error::{GateError, Result};

fn version_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^version\s*=\s*"([^"]+)"\s*$"#).expect("version pattern is valid")
    })
}

/// Reads the manifest at `root/manifest` and returns its declared version.
///
/// The first line of the form `version = "<value>"` anchored at line start
/// wins, so keys such as `rust-version` or quoted text inside other values
/// never match.
///
/// # Errors
/// * `GateError::Config` - if the manifest is missing or has no version line
pub fn read_version(root: &Path, manifest: &str) -> Result<Version> {
    let path = root.join(manifest);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(GateError::config(format!(
                "missing required file: {}",
                manifest
            )));
        }
        Err(e) => return Err(e.into()),
    };

    parse_version(&content).ok_or_else(|| {
        GateError::config(format!("could not parse package version from {}", manifest))
    })
}

/// Extracts the version value from manifest text
pub fn parse_version(content: &str) -> Option<Version> {
    version_line()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| Version::new(m.as_str()))
}
