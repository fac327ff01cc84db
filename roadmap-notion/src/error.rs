//! Error types for roadmap-notion.

use thiserror::Error;

/// All errors that can arise from talking to the Notion API.
#[derive(Debug, Error)]
pub enum NotionError {
    /// The API answered with a non-2xx status (bad token, unknown database,
    /// schema mismatch, rate limit, ...).
    #[error("Notion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Connection-level failure (DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Transport>),

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode Notion response: {0}")]
    Decode(#[from] std::io::Error),
}
