//! Per-task create / update / skip decisions and the full sync pipeline.

use std::collections::HashMap;
use std::path::PathBuf;

use roadmap_core::{flatten, load_roadmap, Task};
use roadmap_notion::{NotionApi, Page};

use crate::diff::needs_update;
use crate::error::SyncError;
use crate::index::build_page_index;
use crate::payload::task_properties;

/// Name of the title property carrying the task identifier, unless
/// overridden in [`SyncConfig`].
pub const DEFAULT_ID_PROPERTY: &str = "Task ID";

// ---------------------------------------------------------------------------
// Config and stats
// ---------------------------------------------------------------------------

/// Everything a sync run needs beyond the API client itself.
///
/// Threaded explicitly into [`run`] — deep logic never reads the
/// environment.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub database_id: String,
    pub roadmap_path: PathBuf,
    pub id_property: String,
    /// Log decisions without issuing any remote mutation.
    pub dry_run: bool,
}

impl SyncConfig {
    pub fn new(database_id: impl Into<String>, roadmap_path: impl Into<PathBuf>) -> Self {
        Self {
            database_id: database_id.into(),
            roadmap_path: roadmap_path.into(),
            id_property: DEFAULT_ID_PROPERTY.to_owned(),
            dry_run: false,
        }
    }
}

/// Outcome tally for one sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SyncStats {
    /// The run succeeded iff no per-task write failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

// ---------------------------------------------------------------------------
// Reconcile
// ---------------------------------------------------------------------------

/// Decide and apply create / update / skip for each task, in order.
///
/// A failed remote write increments `failed` and processing continues with
/// the next task. In dry-run mode decisions are logged but not sent, and
/// counted as if performed.
pub fn reconcile(
    api: &dyn NotionApi,
    tasks: &[Task],
    index: &HashMap<String, Page>,
    config: &SyncConfig,
) -> SyncStats {
    let mut stats = SyncStats::default();

    for task in tasks {
        let properties = task_properties(task, &config.id_property);

        match index.get(task.id.as_str()) {
            Some(page) => {
                if !needs_update(page, &properties, &config.id_property) {
                    log::info!("SKIP (no changes): {}", task.id);
                    stats.skipped += 1;
                } else if config.dry_run {
                    log::info!("DRY-RUN: would update {}", task.id);
                    stats.updated += 1;
                } else {
                    match api.update_page(&page.id, &properties) {
                        Ok(_) => {
                            log::info!("UPDATED: {}", task.id);
                            stats.updated += 1;
                        }
                        Err(err) => {
                            log::error!("error updating {}: {err}", task.id);
                            stats.failed += 1;
                        }
                    }
                }
            }
            None => {
                if config.dry_run {
                    log::info!("DRY-RUN: would create {}", task.id);
                    stats.created += 1;
                } else {
                    match api.create_page(&config.database_id, &properties) {
                        Ok(_) => {
                            log::info!("CREATED: {}", task.id);
                            stats.created += 1;
                        }
                        Err(err) => {
                            log::error!("error creating {}: {err}", task.id);
                            stats.failed += 1;
                        }
                    }
                }
            }
        }
    }

    stats
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

/// Load the roadmap, index the remote database, reconcile every task.
///
/// Load and index failures are fatal; write failures are tallied and the
/// run completes. A re-run with unchanged source and remote state yields
/// `created == updated == failed == 0`.
pub fn run(api: &dyn NotionApi, config: &SyncConfig) -> Result<SyncStats, SyncError> {
    log::info!("loading roadmap from {}", config.roadmap_path.display());
    let doc = load_roadmap(&config.roadmap_path)?;
    let tasks = flatten(&doc)?;
    log::info!("loaded {} tasks from roadmap", tasks.len());

    log::info!("fetching existing pages from the database...");
    let index = build_page_index(api, &config.database_id, &config.id_property)?;
    log::info!("found {} existing tasks in the database", index.len());

    let stats = reconcile(api, &tasks, &index, config);

    log::info!(
        "Sync complete. created={} updated={} skipped={} failed={}",
        stats.created,
        stats.updated,
        stats.skipped,
        stats.failed
    );
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
