//! Release gate orchestration
//!
//! Runs the four checks in order: version reader, linkage checker, change-range
//! resolver, schema detector with the Schema Notes rule. Fatal conditions
//! return an error; everything that only limits what can be inspected is
//! reported as a [SkipNotice] in the [GateReport].

use std::path::PathBuf;

use crate::boundary::SkipNotice;
use crate::config::Config;
use crate::domain::{ChangeRange, LinkageArtifacts, ReleaseTag, Version};
use crate::error::Result;
use crate::git::Repository;
use crate::linkage::check_linkage;
use crate::manifest::read_version;
use crate::range::{resolve_change_range, CiEnvironment};
use crate::schema::{require_schema_notes, SchemaDetector};

/// Inputs for one gate run.
///
/// Root, configuration and environment are explicit so the whole run can be
/// driven against a temporary directory and a mock repository.
#[derive(Debug, Clone, PartialEq)]
pub struct GateArgs {
    /// Repository root all configured paths are relative to
    pub root: PathBuf,

    pub config: Config,

    /// Pipeline environment captured at start-up
    pub env: CiEnvironment,
}

/// How the schema gate concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOutcome {
    /// Detection did not run; see the report's notices
    Skipped,
    /// The range contains no schema markers
    Unchanged { range: ChangeRange },
    /// Schema markers changed and `notes` documents them
    Documented { range: ChangeRange, notes: String },
}

/// Result of a successful gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub version: Version,
    pub tag: ReleaseTag,
    pub schema: SchemaOutcome,
    pub notices: Vec<SkipNotice>,
}

/// Main release gate workflow
///
/// # Returns
/// * `Ok(GateReport)` - Every required check passed
/// * `Err(GateError::Config)` - Manifest or configuration problem
/// * `Err(GateError::Linkage)` - Version not linked across the release docs
/// * `Err(GateError::Policy)` - Schema change without a Schema Notes section
pub fn run_release_gate(args: &GateArgs, repo: &dyn Repository) -> Result<GateReport> {
    let detector = SchemaDetector::new(&args.config.schema.extra_patterns)?;
    let version = read_version(&args.root, &args.config.paths.manifest)?;
    let tag = ReleaseTag::from_version(&version);
    let mut notices = Vec::new();

    if version.semver().is_none() {
        tracing::debug!(version = %version, "version is not semver; linkage checked verbatim");
    }

    let artifacts = LinkageArtifacts::new(&args.root, &args.config.paths, &tag);
    check_linkage(&tag, &artifacts)?;

    let Some(range) = resolve_change_range(&args.env, repo) else {
        notices.push(SkipNotice::NoChangeRange);
        return Ok(GateReport {
            version,
            tag,
            schema: SchemaOutcome::Skipped,
            notices,
        });
    };

    let diff = match repo.diff(&range, &args.config.schema.diff_paths) {
        Ok(diff) => diff,
        Err(e) if e.is_vcs_failure() => {
            tracing::debug!(range = %range, error = %e, "diff unavailable");
            notices.push(SkipNotice::DiffUnavailable {
                range: range.to_string(),
                reason: e.to_string(),
            });
            return Ok(GateReport {
                version,
                tag,
                schema: SchemaOutcome::Skipped,
                notices,
            });
        }
        Err(e) => return Err(e),
    };

    let schema = match detector.first_signal(&diff) {
        None => SchemaOutcome::Unchanged { range },
        Some(signal) => {
            tracing::debug!(
                line = signal.line_number,
                text = %signal.line,
                "schema marker changed"
            );
            let notes = require_schema_notes(&tag, &artifacts)?;
            SchemaOutcome::Documented { range, notes }
        }
    };

    Ok(GateReport {
        version,
        tag,
        schema,
        notices,
    })
}
