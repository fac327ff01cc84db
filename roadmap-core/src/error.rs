//! Error types for roadmap-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading and flattening a roadmap document.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// The roadmap file did not exist at the expected path.
    #[error("roadmap file not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("could not decode JSON from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document root was not a JSON object.
    #[error("expected roadmap root to be an object")]
    RootNotObject,

    /// A structural field (`phases`, `epics`, `tasks`) was present but not an array.
    #[error("expected '{field}' to be a list")]
    NotAList { field: &'static str },
}
