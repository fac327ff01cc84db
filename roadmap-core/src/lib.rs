//! Roadmap core library — domain types, document loading, errors.
//!
//! Public API surface:
//! - [`types`] — [`Task`], [`TaskId`] and field defaults
//! - [`error`] — [`RoadmapError`]
//! - [`loader`] — [`load_roadmap`] / [`flatten`]

pub mod error;
pub mod loader;
pub mod types;

pub use error::RoadmapError;
pub use loader::{flatten, load_roadmap, RoadmapDoc};
pub use types::{Task, TaskId, DEFAULT_OWNER, DEFAULT_PRIORITY, DEFAULT_STATUS};
