//! Task → Notion property payload mapping.
//!
//! # Remote schema
//!
//! | property        | type         | source              |
//! |-----------------|--------------|---------------------|
//! | `<id_property>` | title        | `task.id`           |
//! | `Title`         | rich_text    | `task.title`        |
//! | `Status`        | select       | `task.status`       |
//! | `Priority`      | select       | `task.priority`     |
//! | `Owner`         | select       | `task.owner`        |
//! | `Phase`         | select       | `task.phase_name`   |
//! | `Epic`          | select       | `task.epic_title`   |
//! | `Description`   | rich_text    | `task.description`  |
//! | `Dependencies`  | multi_select | `task.dependencies` |
//!
//! The identifier property name is configurable; everything else is fixed.

use roadmap_core::Task;
use roadmap_notion::{Properties, PropertyValue};

/// Build the desired remote representation of a task. Pure and deterministic.
pub fn task_properties(task: &Task, id_property: &str) -> Properties {
    let mut properties = Properties::new();
    properties.insert(id_property.to_owned(), PropertyValue::title(task.id.as_str()));
    properties.insert(
        "Title".to_owned(),
        PropertyValue::rich_text(task.title.clone()),
    );
    properties.insert(
        "Status".to_owned(),
        PropertyValue::select(task.status.clone()),
    );
    properties.insert(
        "Priority".to_owned(),
        PropertyValue::select(task.priority.clone()),
    );
    properties.insert("Owner".to_owned(), PropertyValue::select(task.owner.clone()));
    properties.insert(
        "Phase".to_owned(),
        PropertyValue::select(task.phase_name.clone()),
    );
    properties.insert(
        "Epic".to_owned(),
        PropertyValue::select(task.epic_title.clone()),
    );
    properties.insert(
        "Description".to_owned(),
        PropertyValue::rich_text(task.description.clone()),
    );
    properties.insert(
        "Dependencies".to_owned(),
        PropertyValue::multi_select(task.dependencies.iter().cloned()),
    );
    properties
}

#[cfg(test)]
mod tests {
    use roadmap_core::TaskId;

    use super::*;

    fn task() -> Task {
        Task {
            id: TaskId::from("T1"),
            title: "Task 1".to_owned(),
            status: "In Progress".to_owned(),
            priority: "High".to_owned(),
            owner: "Alex".to_owned(),
            description: "First task".to_owned(),
            dependencies: vec!["T0".to_owned()],
            phase_name: "Phase 1".to_owned(),
            epic_title: "Epic A".to_owned(),
        }
    }

    #[test]
    fn maps_every_tracked_field() {
        let properties = task_properties(&task(), "Task ID");
        assert_eq!(properties["Task ID"].identifier(), Some("T1"));
        assert_eq!(properties["Title"].plain_text(), "Task 1");
        assert_eq!(properties["Status"].select_name(), "In Progress");
        assert_eq!(properties["Priority"].select_name(), "High");
        assert_eq!(properties["Owner"].select_name(), "Alex");
        assert_eq!(properties["Phase"].select_name(), "Phase 1");
        assert_eq!(properties["Epic"].select_name(), "Epic A");
        assert_eq!(properties["Description"].plain_text(), "First task");
        assert_eq!(properties["Dependencies"].multi_select_names(), ["T0"]);
    }

    #[test]
    fn id_property_name_is_configurable() {
        let properties = task_properties(&task(), "External ID");
        assert_eq!(properties["External ID"].identifier(), Some("T1"));
        assert!(!properties.contains_key("Task ID"));
    }

    #[test]
    fn empty_dependencies_yield_empty_multi_select() {
        let mut task = task();
        task.dependencies = vec!["".to_owned()];
        let properties = task_properties(&task, "Task ID");
        assert!(properties["Dependencies"].multi_select_names().is_empty());
    }

    #[test]
    fn is_deterministic() {
        let task = task();
        assert_eq!(
            task_properties(&task, "Task ID"),
            task_properties(&task, "Task ID")
        );
    }
}
