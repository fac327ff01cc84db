//! # roadmap-sync
//!
//! The reconciliation core: flatten the roadmap, index the remote database
//! by task identifier, then decide create / update / skip per task.
//!
//! Call [`run`] with a [`NotionApi`](roadmap_notion::NotionApi)
//! implementation and a [`SyncConfig`] to execute a full sync run.

pub mod diff;
pub mod error;
pub mod index;
pub mod payload;
pub mod reconcile;

pub use diff::{needs_update, normalize, ComparisonView, NormalizedValue};
pub use error::SyncError;
pub use index::build_page_index;
pub use payload::task_properties;
pub use reconcile::{reconcile, run, SyncConfig, SyncStats, DEFAULT_ID_PROPERTY};
