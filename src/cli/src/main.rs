//! CLI for the release code-freeze automation.
//!
//! `version-bump` prepares trunk for the next development cycle: it bumps
//! the plugin version on a fresh branch and opens a pull request.

use clap::{Args, Parser, Subcommand};
use code_freeze::repository::DEFAULT_REPOSITORY;
use code_freeze::{
    resolve_token, ReleaseSettings, RepositoryRef, VersionBump, VersionBumpConfig,
    VersionBumpError, VersionBumpReport,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Code freeze automation steps.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bump versions ahead of new development cycle.
    VersionBump(VersionBumpArgs),
}

#[derive(Args, Debug)]
struct VersionBumpArgs {
    /// Repository owner.
    #[arg(short, long, default_value = DEFAULT_REPOSITORY)]
    owner: String,

    /// Repository name.
    #[arg(short, long, default_value = DEFAULT_REPOSITORY)]
    name: String,

    /// Path to a release settings TOML file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Version to write into the plugin file; overrides the settings file.
    #[arg(long)]
    next_version: Option<String>,

    /// Base branch; overrides the settings file.
    #[arg(long)]
    base: Option<String>,

    /// Shallow clone depth.
    #[arg(long)]
    depth: Option<u32>,

    /// Commit locally without pushing or opening a pull request.
    #[arg(long)]
    dry_run: bool,

    /// Delete the temporary clone when done.
    #[arg(long)]
    cleanup: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // octocrab's rustls needs a process-wide crypto provider.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::VersionBump(args) => version_bump(args).await,
    };

    match result {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output without module targets; `RUST_LOG` overrides
/// the default `info` level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the run from arguments, settings and environment, then executes it.
async fn version_bump(args: VersionBumpArgs) -> Result<VersionBumpReport, VersionBumpError> {
    let token = resolve_token()?;

    let (mut settings, origin) = match &args.config {
        Some(path) => (ReleaseSettings::load(path)?, path.clone()),
        None => (ReleaseSettings::default(), PathBuf::from("command line")),
    };
    if let Some(version) = args.next_version {
        settings.next_version = version;
    }
    if let Some(base) = args.base {
        settings.base_branch = base;
    }
    settings.validate(&origin)?;

    let repository = RepositoryRef::new(args.owner, args.name)?.with_host(settings.host.clone());
    let config = VersionBumpConfig::new(repository, token, settings)
        .with_dry_run(args.dry_run)
        .with_cleanup(args.cleanup)
        .with_clone_depth(args.depth);

    VersionBump::github(config)?.run().await
}

/// Prints the final run summary.
fn print_summary(report: &VersionBumpReport) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if report.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repository: {}", report.repository);
    println!("  Branch: {} -> {}", report.branch, report.base);
    println!("  Plugin file: {}", report.manifest.as_str());
    if let Some(path) = &report.clone_path {
        println!("  Clone: {}", path.display());
    }
    if let Some(pr) = &report.pull_request {
        println!("  Pull request: #{} {}", pr.number, pr.url);
    }
    if report.needs_attention() {
        println!("  Warning: the plugin file version was not updated");
    }
}
