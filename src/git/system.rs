use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ChangeRange;
use crate::error::{GateError, Result};
use crate::git::Repository;

/// Backend that shells out to the `git` executable
pub struct SystemGit {
    work_tree: PathBuf,
}

impl SystemGit {
    pub fn new(work_tree: &Path) -> Self {
        SystemGit {
            work_tree: work_tree.to_path_buf(),
        }
    }

    /// Build a git command rooted at the work tree.
    ///
    /// User configuration is overridden where it would change diff text.
    /// `color.diff` outranks `color.ui`, so `diff` also passes `--no-color`.
    fn git_cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.work_tree);
        cmd.arg("-c").arg("core.quotePath=false");
        cmd.arg("-c").arg("diff.noprefix=false");
        cmd.arg("-c").arg("color.ui=false");
        cmd
    }
}

impl Repository for SystemGit {
    fn revision_exists(&self, rev: &str) -> bool {
        // Leading dashes would be taken as options.
        if rev.is_empty() || rev.starts_with('-') {
            return false;
        }

        self.git_cmd()
            .args(["rev-parse", "--verify", "--quiet"])
            .arg(format!("{}^{{commit}}", rev))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn diff(&self, range: &ChangeRange, paths: &[String]) -> Result<String> {
        let output = self
            .git_cmd()
            .args([
                "diff",
                "--no-color",
                "--no-ext-diff",
                "--no-textconv",
                "--unified=0",
            ])
            .arg(range.to_string())
            .arg("--")
            .args(paths)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| GateError::git_command(format!("cannot run git diff: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(GateError::git_command(if stderr.is_empty() {
                "git diff failed".to_string()
            } else {
                stderr.to_string()
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{IndexAddOption, Signature};
    use std::fs;
    use tempfile::TempDir;

    fn commit_all(repo: &git2::Repository, message: &str) {
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
            .unwrap();
    }

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    #[test]
    fn test_option_like_revisions_rejected() {
        let git = SystemGit::new(Path::new("."));
        assert!(!git.revision_exists(""));
        assert!(!git.revision_exists("--all"));
    }

    #[test]
    fn test_revision_probe_outside_repository() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let git = SystemGit::new(dir.path());
        assert!(!git.revision_exists("HEAD"));
    }

    #[test]
    fn test_diff_outside_repository_fails() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let git = SystemGit::new(dir.path());
        let err = git
            .diff(&ChangeRange::new("HEAD~1", "HEAD"), &["src".to_string()])
            .unwrap_err();
        assert!(err.is_vcs_failure());
    }

    #[test]
    fn test_diff_is_plain_despite_forced_colour_and_textconv() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("color.diff", "always").unwrap();
        config.set_str("diff.upper.textconv", "tr a-z A-Z").unwrap();

        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join(".gitattributes"), "*.rs diff=upper\n").unwrap();
        fs::write(dir.path().join("src/wire.rs"), "pub fn a() {}\n").unwrap();
        commit_all(&repo, "first");
        fs::write(
            dir.path().join("src/wire.rs"),
            "pub fn a() {}\npub const schema_version: u32 = 4;\n",
        )
        .unwrap();
        commit_all(&repo, "second");

        let diff = SystemGit::new(dir.path())
            .diff(&ChangeRange::new("HEAD~1", "HEAD"), &["src".to_string()])
            .unwrap();
        assert!(!diff.contains('\x1b'));
        assert!(diff
            .lines()
            .any(|line| line == "+pub const schema_version: u32 = 4;"));
    }
}
