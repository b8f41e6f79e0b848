use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use release_readiness::cli::{run_release_gate, GateArgs, GateReport};
use release_readiness::config;
use release_readiness::git;
use release_readiness::range::CiEnvironment;
use release_readiness::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-readiness",
    version,
    about = "Verify that the release version is linked across changelog and release notes, \
             and that schema changes ship with Schema Notes"
)]
struct Args {
    #[arg(long, help = "Repository root (defaults to the current directory)")]
    root: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Diagnostics only when asked for; default output stays three line kinds.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();

    match run(args) {
        Ok(report) => {
            for notice in &report.notices {
                ui::display_notice(notice);
            }
            ui::display_success(&report.tag.name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<GateReport> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let config = config::load_config(&root, args.config.as_deref())?;
    let repo = git::open_backend(config.git.backend, &root);
    let gate_args = GateArgs {
        root,
        config,
        env: CiEnvironment::from_env(),
    };

    Ok(run_release_gate(&gate_args, repo.as_ref())?)
}
