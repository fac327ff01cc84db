//! # roadmap-notion
//!
//! Typed collaborator for the Notion REST API: the property value model,
//! the paginated query / create / update surface, and the blocking HTTP
//! client. The [`NotionApi`] trait is the seam the sync core is written
//! against, so tests can substitute an in-memory store.

pub mod client;
pub mod error;
pub mod properties;

pub use client::{NotionApi, NotionClient, Page, Properties, QueryResponse};
pub use error::NotionError;
pub use properties::{PropertyValue, RichTextSpan, SelectOption};
