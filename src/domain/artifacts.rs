use std::path::{Path, PathBuf};

use crate::config::PathsConfig;
use crate::domain::ReleaseTag;

/// The three release documents whose content depends on the version.
///
/// Stored relative to the repository root; [`LinkageArtifacts::resolve`] turns a
/// location into an absolute path for reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageArtifacts {
    root: PathBuf,
    pub changelog: String,
    pub release_index: String,
    pub release_notes: String,
}

impl LinkageArtifacts {
    pub fn new(root: &Path, paths: &PathsConfig, tag: &ReleaseTag) -> Self {
        let notes_dir = paths.release_notes_dir.trim_end_matches('/');
        let release_notes = if notes_dir.is_empty() {
            tag.release_notes_filename()
        } else {
            format!("{}/{}", notes_dir, tag.release_notes_filename())
        };

        LinkageArtifacts {
            root: root.to_path_buf(),
            changelog: paths.changelog.clone(),
            release_index: paths.release_index.clone(),
            release_notes,
        }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
