//! Domain types for the roadmap sync tool.
//!
//! A [`Task`] is the normalized unit of work: constructed fresh on every run
//! by flattening the roadmap document, never persisted locally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback status for tasks that omit one in the roadmap document.
pub const DEFAULT_STATUS: &str = "Not Started";
/// Fallback priority for tasks that omit one.
pub const DEFAULT_PRIORITY: &str = "Medium";
/// Fallback owner for tasks that omit one.
pub const DEFAULT_OWNER: &str = "Unassigned";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed stable external identifier for a roadmap task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single flattened roadmap task.
///
/// Invariant: `id` and `title` are non-empty — entries violating this are
/// dropped during flattening and never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub owner: String,
    pub description: String,
    /// Ordered as written in the roadmap document; comparison against the
    /// remote store is order-independent.
    pub dependencies: Vec<String>,
    pub phase_name: String,
    pub epic_title: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
