//! Linkage checker: the manifest version must be reflected in the changelog,
//! the release-notes index, and a per-version release-notes file.

use std::fs;
use std::io;

use crate::domain::{LinkageArtifacts, ReleaseTag};
use crate::error::{LinkageViolation, Result};

/// Verifies the three version-linkage invariants in a fixed order.
///
/// The first broken invariant is reported, so the error always names the
/// earliest missing artifact: changelog heading, then index link, then the
/// release-notes file.
pub fn check_linkage(tag: &ReleaseTag, artifacts: &LinkageArtifacts) -> Result<()> {
    let changelog = read_artifact(artifacts, &artifacts.changelog)?;
    if !has_release_heading(&changelog, tag) {
        return Err(LinkageViolation::MissingChangelogHeading {
            changelog: artifacts.changelog.clone(),
            tag: tag.name.clone(),
        }
        .into());
    }

    let index = read_artifact(artifacts, &artifacts.release_index)?;
    let link = tag.index_link();
    if !index.contains(&link) {
        return Err(LinkageViolation::MissingIndexLink {
            index: artifacts.release_index.clone(),
            link,
        }
        .into());
    }

    if !artifacts.resolve(&artifacts.release_notes).is_file() {
        return Err(LinkageViolation::MissingReleaseNotes {
            path: artifacts.release_notes.clone(),
        }
        .into());
    }

    tracing::debug!(tag = %tag, "version linkage verified");
    Ok(())
}

/// Reads a linkage artifact, mapping absence to a linkage violation
pub(crate) fn read_artifact(artifacts: &LinkageArtifacts, relative: &str) -> Result<String> {
    match fs::read_to_string(artifacts.resolve(relative)) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LinkageViolation::MissingFile {
            path: relative.to_string(),
        }
        .into()),
        Err(e) => Err(e.into()),
    }
}

/// Whether `changelog` has a `## <tag>` or `### <tag>` heading line.
///
/// Up to three columns of indentation are allowed. The tag must end there or
/// be followed by a non-version character, so `## v1.0.0-rc1` does not count
/// as a heading for `v1.0.0`.
pub fn has_release_heading(changelog: &str, tag: &ReleaseTag) -> bool {
    let heading = tag.changelog_heading();
    changelog.lines().any(|line| {
        let text = line.trim_start_matches([' ', '\t']);
        if line.len() - text.len() > 3 {
            return false;
        }
        let text = text
            .strip_prefix('#')
            .filter(|rest| rest.starts_with("##"))
            .unwrap_or(text);
        match text.strip_prefix(&heading) {
            Some(rest) => !rest
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+')),
            None => false,
        }
    })
}
