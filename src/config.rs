use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GateError, Result};

/// File name looked up in the repository root when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "release-readiness.toml";

/// Represents the complete configuration for release-readiness.
///
/// Every section is optional; an absent file yields the layout of a standard
/// Cargo repository with release notes under `docs/release-notes`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_manifest() -> String {
    "Cargo.toml".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

fn default_release_index() -> String {
    "docs/release-notes/README.md".to_string()
}

fn default_release_notes_dir() -> String {
    "docs/release-notes".to_string()
}

/// Locations of the linkage artifacts, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_changelog")]
    pub changelog: String,

    #[serde(default = "default_release_index")]
    pub release_index: String,

    #[serde(default = "default_release_notes_dir")]
    pub release_notes_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            manifest: default_manifest(),
            changelog: default_changelog(),
            release_index: default_release_index(),
            release_notes_dir: default_release_notes_dir(),
        }
    }
}

/// Returns the top-level paths whose diff is inspected for schema markers.
fn default_diff_paths() -> Vec<String> {
    vec!["src".to_string(), "tests".to_string(), "docs".to_string()]
}

/// Configuration for schema-change detection.
///
/// `extra_patterns` are added to the built-in marker set; they never replace it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SchemaConfig {
    #[serde(default = "default_diff_paths")]
    pub diff_paths: Vec<String>,

    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        SchemaConfig {
            diff_paths: default_diff_paths(),
            extra_patterns: Vec::new(),
        }
    }
}

/// Which version-control backend answers revision probes and diffs.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// The `git` executable on `PATH`
    #[default]
    System,
    /// In-process libgit2
    Libgit2,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: GitBackend,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `release-readiness.toml` in the repository root
/// 3. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(GateError::Config)` - If a file exists but cannot be read or parsed
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let candidate = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = root.join(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_str = fs::read_to_string(&candidate).map_err(|e| {
        GateError::config(format!(
            "cannot read config file {}: {}",
            candidate.display(),
            e
        ))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        GateError::config(format!("invalid config file {}: {}", candidate.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.paths.manifest, "Cargo.toml");
        assert_eq!(config.paths.changelog, "CHANGELOG.md");
        assert_eq!(config.paths.release_index, "docs/release-notes/README.md");
        assert_eq!(config.paths.release_notes_dir, "docs/release-notes");
        assert_eq!(config.schema.diff_paths, vec!["src", "tests", "docs"]);
        assert!(config.schema.extra_patterns.is_empty());
        assert_eq!(config.git.backend, GitBackend::System);
    }

    #[test]
    fn test_missing_root_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_root_config_partial_override() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"
[paths]
changelog = "docs/CHANGES.md"

[git]
backend = "libgit2"
"#,
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.paths.changelog, "docs/CHANGES.md");
        assert_eq!(config.paths.manifest, "Cargo.toml");
        assert_eq!(config.git.backend, GitBackend::Libgit2);
        assert_eq!(config.schema, SchemaConfig::default());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, GateError::Config(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[git]\nbackend = \"svn\"\n").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(matches!(err, GateError::Config(_)));
    }
}
