//! Roadmap document loading and flattening.
//!
//! # Document schema
//!
//! ```text
//! {
//!   "phases": [
//!     {
//!       "phaseName": "...",
//!       "epics": [
//!         { "epicTitle": "...", "tasks": [ { task fields... }, ... ] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Structural problems (root not an object, `phases`/`epics`/`tasks` not
//! lists) are fatal. Per-entry problems (missing id or title, bad dependency
//! shape) drop or default the entry with a warning and the run continues.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::RoadmapError;
use crate::types::{Task, TaskId, DEFAULT_OWNER, DEFAULT_PRIORITY, DEFAULT_STATUS};

/// Parsed roadmap document root.
pub type RoadmapDoc = serde_json::Map<String, Value>;

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Read and parse the roadmap document at `path`.
///
/// Returns `RoadmapError::NotFound` if absent, `RoadmapError::Parse` (with
/// path context) if malformed, `RoadmapError::RootNotObject` if the root is
/// not a keyed mapping.
pub fn load_roadmap(path: &Path) -> Result<RoadmapDoc, RoadmapError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(RoadmapError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => {
            return Err(RoadmapError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    let value: Value = serde_json::from_str(&contents).map_err(|e| RoadmapError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(RoadmapError::RootNotObject),
    }
}

// ---------------------------------------------------------------------------
// Flatten
// ---------------------------------------------------------------------------

/// Flatten `phases[*].epics[*].tasks[*]` into a list of [`Task`]s.
///
/// Output order matches document order (phase, then epic, then task).
/// Entries with a missing or non-string `id` or `title` are skipped with a
/// warning; every returned task has both non-empty.
pub fn flatten(doc: &RoadmapDoc) -> Result<Vec<Task>, RoadmapError> {
    let mut tasks = Vec::new();

    for phase in list_field(doc.get("phases"), "phases")? {
        let Some(phase) = phase.as_object() else {
            log::warn!("skipping phase that is not an object: {phase}");
            continue;
        };
        let phase_name = str_field(phase, "phaseName", "");

        for epic in list_field(phase.get("epics"), "epics")? {
            let Some(epic) = epic.as_object() else {
                log::warn!("skipping epic that is not an object: {epic}");
                continue;
            };
            let epic_title = str_field(epic, "epicTitle", "");

            for raw_task in list_field(epic.get("tasks"), "tasks")? {
                let Some(raw) = raw_task.as_object() else {
                    log::warn!("skipping task with invalid or missing id: {raw_task}");
                    continue;
                };
                let Some(id) = nonempty_str(raw.get("id")) else {
                    log::warn!("skipping task with invalid or missing id: {raw_task}");
                    continue;
                };
                let Some(title) = nonempty_str(raw.get("title")) else {
                    log::warn!("skipping task with invalid or missing title: {raw_task}");
                    continue;
                };

                tasks.push(Task {
                    id: TaskId::from(id),
                    title: title.to_owned(),
                    status: str_field(raw, "status", DEFAULT_STATUS),
                    priority: str_field(raw, "priority", DEFAULT_PRIORITY),
                    owner: str_field(raw, "owner", DEFAULT_OWNER),
                    description: str_field(raw, "description", ""),
                    dependencies: dependencies_field(raw, id),
                    phase_name: phase_name.clone(),
                    epic_title: epic_title.clone(),
                });
            }
        }
    }

    Ok(tasks)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Treat a missing or null field as an empty list; anything else must be an array.
fn list_field<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a [Value], RoadmapError> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(RoadmapError::NotAList { field }),
    }
}

fn nonempty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn str_field(obj: &RoadmapDoc, key: &str, default: &str) -> String {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) => s.to_owned(),
        None => default.to_owned(),
    }
}

/// Dependencies must be a list; anything else coerces to empty with a warning.
/// List entries are stringified, non-scalar entries dropped.
fn dependencies_field(obj: &RoadmapDoc, task_id: &str) -> Vec<String> {
    match obj.get("dependencies") {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Some(_) => {
            log::warn!("task {task_id} has non-list dependencies; coercing to empty list");
            vec![]
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn doc(value: Value) -> RoadmapDoc {
        value.as_object().expect("object").clone()
    }

    fn write_roadmap(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("roadmap.json");
        fs::write(&path, contents).expect("write roadmap");
        path
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_roadmap(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RoadmapError::NotFound { .. }));
    }

    #[test]
    fn load_malformed_json_returns_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_roadmap(&dir, "{not json");
        let err = load_roadmap(&path).unwrap_err();
        assert!(matches!(err, RoadmapError::Parse { .. }));
    }

    #[test]
    fn load_non_object_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_roadmap(&dir, "[1, 2, 3]");
        let err = load_roadmap(&path).unwrap_err();
        assert!(matches!(err, RoadmapError::RootNotObject));
    }

    #[test]
    fn load_and_flatten_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = write_roadmap(
            &dir,
            r#"{"phases":[{"phaseName":"P1","epics":[{"epicTitle":"E1","tasks":[{"id":"T1","title":"Task 1"}]}]}]}"#,
        );
        let doc = load_roadmap(&path).expect("load");
        let tasks = flatten(&doc).expect("flatten");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::from("T1"));
        assert_eq!(tasks[0].phase_name, "P1");
        assert_eq!(tasks[0].epic_title, "E1");
    }

    #[test]
    fn flatten_empty_document_yields_no_tasks() {
        let tasks = flatten(&doc(json!({}))).expect("flatten");
        assert!(tasks.is_empty());
    }

    #[test]
    fn flatten_applies_defaults_for_missing_fields() {
        let tasks = flatten(&doc(json!({
            "phases": [{"epics": [{"tasks": [{"id": "T1", "title": "Task 1"}]}]}]
        })))
        .expect("flatten");
        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.status, DEFAULT_STATUS);
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert_eq!(task.owner, DEFAULT_OWNER);
        assert_eq!(task.description, "");
        assert!(task.dependencies.is_empty());
        assert_eq!(task.phase_name, "");
        assert_eq!(task.epic_title, "");
    }

    #[test]
    fn flatten_skips_tasks_missing_id_or_title() {
        let tasks = flatten(&doc(json!({
            "phases": [{"epics": [{"tasks": [
                {"title": "Missing ID"},
                {"id": "T2"},
                {"id": 42, "title": "Numeric id"},
                {"id": "T3", "title": "Kept"}
            ]}]}]
        })))
        .expect("flatten");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::from("T3"));
    }

    #[test]
    fn flatten_preserves_document_order() {
        let tasks = flatten(&doc(json!({
            "phases": [
                {"phaseName": "P1", "epics": [
                    {"epicTitle": "E1", "tasks": [{"id": "T1", "title": "a"}, {"id": "T2", "title": "b"}]},
                    {"epicTitle": "E2", "tasks": [{"id": "T3", "title": "c"}]}
                ]},
                {"phaseName": "P2", "epics": [
                    {"epicTitle": "E3", "tasks": [{"id": "T4", "title": "d"}]}
                ]}
            ]
        })))
        .expect("flatten");
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["T1", "T2", "T3", "T4"]);
    }

    #[test]
    fn flatten_coerces_non_list_dependencies_to_empty() {
        let tasks = flatten(&doc(json!({
            "phases": [{"epics": [{"tasks": [
                {"id": "T1", "title": "x", "dependencies": "T0"}
            ]}]}]
        })))
        .expect("flatten");
        assert!(tasks[0].dependencies.is_empty());
    }

    #[test]
    fn flatten_stringifies_dependency_entries() {
        let tasks = flatten(&doc(json!({
            "phases": [{"epics": [{"tasks": [
                {"id": "T1", "title": "x", "dependencies": ["T0", 7, true]}
            ]}]}]
        })))
        .expect("flatten");
        assert_eq!(tasks[0].dependencies, ["T0", "7", "true"]);
    }

    #[test]
    fn flatten_rejects_non_list_phases() {
        let err = flatten(&doc(json!({"phases": "nope"}))).unwrap_err();
        assert!(matches!(err, RoadmapError::NotAList { field: "phases" }));
    }

    #[test]
    fn flatten_rejects_non_list_epics_and_tasks() {
        let err = flatten(&doc(json!({"phases": [{"epics": {}}]}))).unwrap_err();
        assert!(matches!(err, RoadmapError::NotAList { field: "epics" }));

        let err = flatten(&doc(json!({"phases": [{"epics": [{"tasks": 3}]}]}))).unwrap_err();
        assert!(matches!(err, RoadmapError::NotAList { field: "tasks" }));
    }

    #[test]
    fn flatten_treats_null_phases_as_empty() {
        let tasks = flatten(&doc(json!({"phases": null}))).expect("flatten");
        assert!(tasks.is_empty());
    }
}
