// Shared fixtures for integration tests
#![allow(dead_code)]

use git2::{IndexAddOption, Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const CI_VARS: &[&str] = &[
    "GITHUB_EVENT_NAME",
    "GITHUB_BASE_SHA",
    "GITHUB_SHA",
    "GITHUB_EVENT_BEFORE",
    "RUST_LOG",
];

/// A repository laid out the way the gate expects, optionally under git
pub struct ReleaseRepo {
    pub dir: TempDir,
    git: Option<Repository>,
}

impl ReleaseRepo {
    /// Manifest, changelog, index and release notes all linked for `version`
    pub fn linked(version: &str) -> Self {
        let repo = ReleaseRepo {
            dir: TempDir::new().unwrap(),
            git: None,
        };
        let tag = format!("v{}", version);
        repo.write(
            "Cargo.toml",
            &format!(
                "[package]\nname = \"demo\"\nversion = \"{}\"\nrust-version = \"1.70\"\n",
                version
            ),
        );
        repo.write(
            "CHANGELOG.md",
            &format!("# Changelog\n\n## {}\n\n- Initial release.\n", tag),
        );
        repo.write(
            "docs/release-notes/README.md",
            &format!("# Release notes\n\n- [{0}](RELEASE_NOTES_{0}.md)\n", tag),
        );
        repo.write(
            &format!("docs/release-notes/RELEASE_NOTES_{}.md", tag),
            &format!("# {}\n\nHighlights.\n", tag),
        );
        repo.write("src/lib.rs", "pub fn answer() -> u32 {\n    42\n}\n");
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.dir.path().join(relative)).unwrap();
    }

    /// Put the working tree under git and commit everything
    pub fn init_git(&mut self) -> Oid {
        self.git = Some(Repository::init(self.dir.path()).unwrap());
        self.commit("Initial commit")
    }

    /// Commit the whole working tree on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let repo = self.git.as_ref().expect("call init_git first");
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Release Bot", "release@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Select the in-process libgit2 backend through the root config file
    pub fn use_libgit2(&self) {
        self.write("release-readiness.toml", "[git]\nbackend = \"libgit2\"\n");
    }
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
