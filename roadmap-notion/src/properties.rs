//! Notion property values.
//!
//! The wire shape of a page property is `{"type": "<tag>", "<tag>": ...}`;
//! [`PropertyValue`] models that as an internally tagged union. Property
//! types this tool does not track (dates, people, checkboxes, ...) parse
//! into [`PropertyValue::Unsupported`] and are ignored by comparison.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// Inline text content for a rich text span being written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// One span of a title or rich text value.
///
/// Responses carry `plain_text`; payloads carry `text.content`. Extraction
/// prefers `plain_text` and falls back to `text.content`, so a span read
/// back from the API and a span about to be sent compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextSpan {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl RichTextSpan {
    /// A span carrying `content`, shaped for a write payload.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            kind: Some("text".to_owned()),
            text: Some(TextContent {
                content: content.into(),
            }),
            plain_text: None,
        }
    }

    /// The plain content of this span, whichever side it came from.
    pub fn plain(&self) -> &str {
        if let Some(plain) = self.plain_text.as_deref() {
            return plain;
        }
        self.text.as_ref().map(|t| t.content.as_str()).unwrap_or("")
    }
}

/// A named option of a select, multi-select, or status property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

// ---------------------------------------------------------------------------
// PropertyValue
// ---------------------------------------------------------------------------

/// A typed Notion property value, tagged the way the API tags it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        title: Vec<RichTextSpan>,
    },
    RichText {
        rich_text: Vec<RichTextSpan>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Status {
        status: Option<SelectOption>,
    },
    /// Any property type this tool does not track.
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    /// A single-span title payload.
    pub fn title(content: impl Into<String>) -> Self {
        PropertyValue::Title {
            title: vec![RichTextSpan::from_content(content)],
        }
    }

    /// A rich text payload; empty content yields an empty span list.
    pub fn rich_text(content: impl Into<String>) -> Self {
        let content = content.into();
        let rich_text = if content.is_empty() {
            vec![]
        } else {
            vec![RichTextSpan::from_content(content)]
        };
        PropertyValue::RichText { rich_text }
    }

    /// A select payload; an empty name clears the selection.
    pub fn select(name: impl Into<String>) -> Self {
        let name = name.into();
        PropertyValue::Select {
            select: (!name.is_empty()).then_some(SelectOption { name }),
        }
    }

    /// A multi-select payload; empty names are dropped.
    pub fn multi_select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValue::MultiSelect {
            multi_select: names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .map(|name| SelectOption { name })
                .collect(),
        }
    }

    // -- Extraction, keyed by variant ---------------------------------------

    /// Plain text of a title (first span) or rich text (all spans joined).
    /// Everything else extracts as empty.
    pub fn plain_text(&self) -> String {
        match self {
            PropertyValue::Title { title } => title
                .first()
                .map(|span| span.plain().to_owned())
                .unwrap_or_default(),
            PropertyValue::RichText { rich_text } => {
                rich_text.iter().map(RichTextSpan::plain).collect()
            }
            _ => String::new(),
        }
    }

    /// Name of a select or status value, empty when cleared or untyped.
    pub fn select_name(&self) -> &str {
        match self {
            PropertyValue::Select { select: Some(opt) }
            | PropertyValue::Status { status: Some(opt) } => &opt.name,
            _ => "",
        }
    }

    /// Sorted option names of a multi-select value.
    pub fn multi_select_names(&self) -> Vec<String> {
        match self {
            PropertyValue::MultiSelect { multi_select } => {
                let mut names: Vec<String> = multi_select
                    .iter()
                    .map(|opt| opt.name.clone())
                    .filter(|name| !name.is_empty())
                    .collect();
                names.sort();
                names
            }
            _ => vec![],
        }
    }

    /// The external identifier carried by this property, when it is stored
    /// as a title or rich text value: the first span's plain content.
    pub fn identifier(&self) -> Option<&str> {
        let first = match self {
            PropertyValue::Title { title } => title.first(),
            PropertyValue::RichText { rich_text } => rich_text.first(),
            _ => None,
        }?;
        let plain = first.plain();
        (!plain.is_empty()).then_some(plain)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
