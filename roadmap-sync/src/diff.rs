//! Normalized comparison between an existing page and a desired payload.
//!
//! Both sides are projected onto the same fixed field set before comparing,
//! so a field absent on one side and empty on the other compare equal, and
//! properties this tool does not write (dates, people, ...) never trigger
//! an update.

use std::collections::BTreeMap;

use roadmap_notion::{Page, Properties, PropertyValue};

/// Select-typed properties tracked for comparison.
const TRACKED_SELECTS: [&str; 5] = ["Status", "Priority", "Owner", "Phase", "Epic"];

/// Canonical form of one tracked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedValue {
    Text(String),
    /// Sorted option names — multi-valued comparison is order-independent.
    Names(Vec<String>),
}

/// Derived, never persisted: field name → canonical value.
pub type ComparisonView = BTreeMap<String, NormalizedValue>;

/// Project `properties` (a page's fields or a payload about to be sent)
/// onto the tracked field set.
pub fn normalize(properties: &Properties, id_property: &str) -> ComparisonView {
    let mut view = ComparisonView::new();

    let identifier = properties
        .get(id_property)
        .and_then(PropertyValue::identifier)
        .unwrap_or_default();
    view.insert(
        id_property.to_owned(),
        NormalizedValue::Text(identifier.to_owned()),
    );

    for key in ["Title", "Description"] {
        let text = properties.get(key).map(PropertyValue::plain_text);
        view.insert(
            key.to_owned(),
            NormalizedValue::Text(text.unwrap_or_default()),
        );
    }

    for key in TRACKED_SELECTS {
        let name = properties.get(key).map(PropertyValue::select_name);
        view.insert(
            key.to_owned(),
            NormalizedValue::Text(name.unwrap_or_default().to_owned()),
        );
    }

    let names = properties
        .get("Dependencies")
        .map(PropertyValue::multi_select_names)
        .unwrap_or_default();
    view.insert("Dependencies".to_owned(), NormalizedValue::Names(names));

    view
}

/// Whether `page` differs from `payload` on any tracked field.
/// Pure and total: never fails, never touches the network.
pub fn needs_update(page: &Page, payload: &Properties, id_property: &str) -> bool {
    normalize(&page.properties, id_property) != normalize(payload, id_property)
}
