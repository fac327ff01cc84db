//! Remote index builder — task identifier → existing page.

use std::collections::HashMap;

use roadmap_notion::{NotionApi, NotionError, Page, PropertyValue};

/// Fetch every page in the database and map it by task identifier.
///
/// Pages through the query endpoint until `has_more` is false. The
/// identifier is the first text span's plain content of the property named
/// `id_property`, accepted as either a title or rich text value. Pages with
/// an empty or missing identifier are skipped with a warning — the remote
/// store permits rows without one.
///
/// Duplicate identifiers overwrite: the last page returned wins.
pub fn build_page_index(
    api: &dyn NotionApi,
    database_id: &str,
    id_property: &str,
) -> Result<HashMap<String, Page>, NotionError> {
    let mut index = HashMap::new();
    let mut cursor: Option<String> = None;

    loop {
        let response = api.query(database_id, cursor.as_deref())?;

        for page in response.results {
            let task_id = page
                .properties
                .get(id_property)
                .and_then(PropertyValue::identifier)
                .map(str::to_owned);
            match task_id {
                Some(task_id) => {
                    index.insert(task_id, page);
                }
                None => {
                    log::warn!("skipping page {} - '{id_property}' is empty", page.id);
                }
            }
        }

        if !response.has_more {
            break;
        }
        // has_more without a cursor would refetch the first page forever.
        match response.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(index)
}
