//! roadmap — sync roadmap.json tasks into a Notion database.
//!
//! # Usage
//!
//! ```text
//! roadmap [--database-id <id>] [--roadmap <path>] [--id-property <name>]
//!         [--dry-run] [--verbose]
//! ```
//!
//! Requires `NOTION_API_KEY` in the environment. `--database-id`,
//! `--roadmap`, and `--id-property` fall back to `NOTION_DATABASE_ID`,
//! `ROADMAP_FILE_PATH`, and `NOTION_ID_PROPERTY`.
//!
//! Exits 0 when the run completes with zero failed writes, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use roadmap_notion::NotionClient;
use roadmap_sync::{SyncConfig, SyncStats, DEFAULT_ID_PROPERTY};

#[derive(Parser, Debug)]
#[command(
    name = "roadmap",
    version,
    about = "Sync roadmap.json tasks into a Notion database",
    long_about = None,
)]
struct Cli {
    /// Notion database ID (defaults to NOTION_DATABASE_ID).
    #[arg(long)]
    database_id: Option<String>,

    /// Path to the roadmap JSON document (defaults to ROADMAP_FILE_PATH or roadmap.json).
    #[arg(long)]
    roadmap: Option<PathBuf>,

    /// Name of the title property carrying the task ID (defaults to NOTION_ID_PROPERTY).
    #[arg(long)]
    id_property: Option<String>,

    /// Log planned changes without making any Notion API calls.
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dry_run = cli.dry_run;
    match run_sync(cli) {
        Ok(stats) => {
            print_summary(&stats, dry_run);
            if stats.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_sync(cli: Cli) -> Result<SyncStats> {
    let token = env_value("NOTION_API_KEY")
        .context("NOTION_API_KEY environment variable not set")?;
    let database_id = cli
        .database_id
        .or_else(|| env_value("NOTION_DATABASE_ID"))
        .context("provide --database-id or set NOTION_DATABASE_ID")?;
    let roadmap_path = cli
        .roadmap
        .or_else(|| env_value("ROADMAP_FILE_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("roadmap.json"));
    let id_property = cli
        .id_property
        .or_else(|| env_value("NOTION_ID_PROPERTY"))
        .unwrap_or_else(|| DEFAULT_ID_PROPERTY.to_owned());

    let config = SyncConfig {
        database_id,
        roadmap_path,
        id_property,
        dry_run: cli.dry_run,
    };
    let client = NotionClient::new(token);
    Ok(roadmap_sync::run(&client, &config)?)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn print_summary(stats: &SyncStats, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let mark = if stats.is_success() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!(
        "{prefix}{mark} sync complete ({} created, {} updated, {} skipped, {} failed)",
        stats.created, stats.updated, stats.skipped, stats.failed
    );
}
