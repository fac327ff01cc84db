//! Blocking Notion REST client and the [`NotionApi`] trait seam.
//!
//! Endpoints used:
//! - `POST /v1/databases/{id}/query` — paginated page listing
//! - `POST /v1/pages` — create
//! - `PATCH /v1/pages/{page_id}` — update
//!
//! Authentication (bearer token) and the `Notion-Version` header are
//! configured once at construction and attached to every request.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::NotionError;
use crate::properties::PropertyValue;

/// API version pinned for this tool.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Production API root; overridable for tests.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Page size requested per query; the API caps at 100.
const QUERY_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Property-name to typed-value mapping, as stored on a page or sent in a
/// create/update payload.
pub type Properties = BTreeMap<String, PropertyValue>;

/// A page in a Notion database, addressed by its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: Properties,
}

/// One page of results from a database query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

// ---------------------------------------------------------------------------
// NotionApi trait
// ---------------------------------------------------------------------------

/// The remote surface the sync core depends on.
///
/// Implemented by [`NotionClient`] for the real API and by in-memory fakes
/// in tests.
pub trait NotionApi {
    /// Fetch one page of results, continuing from `cursor` when given.
    fn query(&self, database_id: &str, cursor: Option<&str>)
        -> Result<QueryResponse, NotionError>;

    /// Create a page in the database with the given properties.
    fn create_page(&self, database_id: &str, properties: &Properties)
        -> Result<Page, NotionError>;

    /// Replace tracked properties on an existing page.
    fn update_page(&self, page_id: &str, properties: &Properties) -> Result<Page, NotionError>;
}

// ---------------------------------------------------------------------------
// NotionClient
// ---------------------------------------------------------------------------

/// Blocking HTTP implementation of [`NotionApi`].
pub struct NotionClient {
    agent: ureq::Agent,
    token: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Construct against a non-default API root (local test servers).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        self.agent
            .request(method, &format!("{}{}", self.base_url, path))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Notion-Version", NOTION_VERSION)
    }

    fn send<T: serde::de::DeserializeOwned>(
        request: ureq::Request,
        body: serde_json::Value,
    ) -> Result<T, NotionError> {
        match request.send_json(body) {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(status, response)) => Err(NotionError::Api {
                status,
                message: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => {
                Err(NotionError::Transport(Box::new(transport)))
            }
        }
    }
}

impl NotionApi for NotionClient {
    fn query(
        &self,
        database_id: &str,
        cursor: Option<&str>,
    ) -> Result<QueryResponse, NotionError> {
        let mut body = json!({ "page_size": QUERY_PAGE_SIZE });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }
        Self::send(
            self.request("POST", &format!("/databases/{database_id}/query")),
            body,
        )
    }

    fn create_page(
        &self,
        database_id: &str,
        properties: &Properties,
    ) -> Result<Page, NotionError> {
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });
        Self::send(self.request("POST", "/pages"), body)
    }

    fn update_page(&self, page_id: &str, properties: &Properties) -> Result<Page, NotionError> {
        let body = json!({ "properties": properties });
        Self::send(self.request("PATCH", &format!("/pages/{page_id}")), body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_response_parses_pagination_fields() {
        let response: QueryResponse = serde_json::from_str(
            r#"{
                "object": "list",
                "results": [
                    {"object": "page", "id": "p1", "properties": {
                        "Task ID": {"type": "title", "title": [{"plain_text": "T1"}]}
                    }}
                ],
                "has_more": true,
                "next_cursor": "cursor-1"
            }"#,
        )
        .expect("parse");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, "p1");
        assert!(response.has_more);
        assert_eq!(response.next_cursor.as_deref(), Some("cursor-1"));
    }

    #[test]
    fn query_response_defaults_when_fields_absent() {
        let response: QueryResponse = serde_json::from_str("{}").expect("parse");
        assert!(response.results.is_empty());
        assert!(!response.has_more);
        assert!(response.next_cursor.is_none());
    }

    #[test]
    fn page_with_unknown_property_types_still_parses() {
        let page: Page = serde_json::from_str(
            r#"{"id": "p1", "properties": {
                "Task ID": {"type": "title", "title": [{"plain_text": "T1"}]},
                "Due": {"type": "date", "date": {"start": "2024-01-01"}}
            }}"#,
        )
        .expect("parse");
        assert_eq!(page.properties.len(), 2);
        assert_eq!(
            page.properties.get("Due"),
            Some(&PropertyValue::Unsupported)
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = NotionClient::with_base_url("tok", "http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
