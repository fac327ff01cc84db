//! Error types for roadmap-sync.

use thiserror::Error;

use roadmap_core::RoadmapError;
use roadmap_notion::NotionError;

/// Fatal errors for a sync run.
///
/// Per-task write failures are not errors at this level — they are counted
/// in [`SyncStats`](crate::SyncStats) and the run continues.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The roadmap document could not be loaded or flattened.
    #[error("failed to load roadmap: {0}")]
    Roadmap(#[from] RoadmapError),

    /// The remote index could not be built; pagination cannot safely resume
    /// from a broken cursor, so the run aborts.
    #[error("failed to fetch existing pages: {0}")]
    Notion(#[from] NotionError),
}
